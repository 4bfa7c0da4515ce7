use listening_core::model::{OptionLetter, PartId, QuestionId, ReviewFilter};
use services::{Confirmation, EMPTY_SELECTION_WARNING};

use super::test_harness::{SAMPLE_BANK, ViewHarness, setup_view_harness};
use crate::vm::{EMPTY_FILTER_MESSAGE, QuizIntent};

fn letter(raw: char) -> OptionLetter {
    OptionLetter::from_char(raw).expect("letter")
}

async fn practicing_both_parts() -> ViewHarness {
    let mut harness = setup_view_harness(SAMPLE_BANK).await;
    harness.send(QuizIntent::TogglePart(PartId::new(1)));
    harness.send(QuizIntent::TogglePart(PartId::new(2)));
    harness.send(QuizIntent::Start);
    harness
}

async fn submitted_attempt() -> ViewHarness {
    let mut harness = practicing_both_parts().await;
    harness.send(QuizIntent::Answer(QuestionId::new(1), letter('B')));
    harness.send(QuizIntent::NextPart);
    harness.send(QuizIntent::Answer(QuestionId::new(3), letter('A')));
    harness.send(QuizIntent::Submit);
    harness.answer_prompt(Confirmation::Accepted);
    harness
}

#[tokio::test(flavor = "current_thread")]
async fn selection_lists_parts_with_labels() {
    let harness = setup_view_harness(SAMPLE_BANK).await;
    let html = harness.render();

    assert!(html.contains("Listening Mock Test"), "missing title in {html}");
    assert!(html.contains("Practice round"), "missing subtitle in {html}");
    assert!(html.contains("Choose the part(s) that you want to practice"));
    assert!(html.contains("Part 1: Picture Description"));
    assert!(html.contains("Part 2 - Short Talks"));
    assert!(!html.contains("Start Practice"), "start shown with nothing selected");
}

#[tokio::test(flavor = "current_thread")]
async fn selecting_a_part_reveals_start() {
    let mut harness = setup_view_harness(SAMPLE_BANK).await;
    harness.send(QuizIntent::TogglePart(PartId::new(2)));
    let html = harness.render();
    assert!(html.contains("Start Practice"), "missing start in {html}");

    harness.send(QuizIntent::TogglePart(PartId::new(2)));
    assert!(!harness.render().contains("Start Practice"));
}

#[tokio::test(flavor = "current_thread")]
async fn starting_with_nothing_selected_warns() {
    let mut harness = setup_view_harness(SAMPLE_BANK).await;
    harness.send(QuizIntent::Start);
    let html = harness.render();
    assert!(html.contains(EMPTY_SELECTION_WARNING), "missing warning in {html}");
    assert!(!html.contains("quiz-area"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_shows_first_part_questions() {
    let harness = practicing_both_parts().await;
    let html = harness.render();

    assert!(!html.contains("Choose the part(s)"), "selection still shown in {html}");
    assert!(html.contains("quiz-area"));
    assert!(html.contains("Part 1: Picture Description"));
    assert!(html.contains("1. Where will they meet?"));
    assert!(html.contains("2. What time does the class start?"));
    assert!(!html.contains("How will he travel?"));
    assert!(html.contains("quiz-audio-1"));
    assert!(html.contains("audio/1.mp3"));
    assert!(html.contains("Question 1"), "missing image alt in {html}");
    assert!(html.contains("Next Part"));
    assert!(!html.contains("Submit Answers"));
}

#[tokio::test(flavor = "current_thread")]
async fn answering_and_transcript_toggle_render() {
    let mut harness = practicing_both_parts().await;
    assert!(!harness.render().contains("option selected"));

    harness.send(QuizIntent::Answer(QuestionId::new(1), letter('B')));
    harness.send(QuizIntent::ToggleTranscript(QuestionId::new(1)));
    let html = harness.render();
    assert!(html.contains("option selected"), "missing selection in {html}");
    assert!(html.contains("Let us meet at the library."));
    assert!(html.contains("Hide Transcript"));

    harness.send(QuizIntent::ToggleTranscript(QuestionId::new(1)));
    assert!(!harness.render().contains("Let us meet at the library."));
}

#[tokio::test(flavor = "current_thread")]
async fn last_part_offers_submit() {
    let mut harness = practicing_both_parts().await;
    harness.send(QuizIntent::NextPart);
    let html = harness.render();

    assert!(html.contains("Part 2 - Short Talks"));
    assert!(html.contains("3. How will he travel?"));
    assert!(!html.contains("Where will they meet?"));
    assert!(html.contains("Submit Answers"));
    assert!(!html.contains("Next Part"));
}

#[tokio::test(flavor = "current_thread")]
async fn declined_submit_keeps_practicing() {
    let mut harness = practicing_both_parts().await;
    harness.send(QuizIntent::NextPart);
    harness.send(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Are you sure you want to submit?"), "missing prompt in {html}");

    harness.answer_prompt(Confirmation::Declined);
    let html = harness.render();
    assert!(!html.contains("Are you sure you want to submit?"));
    assert!(!html.contains("Accuracy"));
    assert!(html.contains("Submit Answers"));
}

#[tokio::test(flavor = "current_thread")]
async fn accepted_submit_shows_results() {
    let harness = submitted_attempt().await;
    let html = harness.render();

    assert!(html.contains("Results"), "missing results in {html}");
    assert!(html.contains("Accuracy"));
    assert!(html.contains("33"), "missing percentage in {html}");
    assert!(html.contains("Score: 1 / 2"), "missing part 1 breakdown in {html}");
    assert!(html.contains("Score: 0 / 1"), "missing part 2 breakdown in {html}");
    assert!(html.contains("✅ Correct"));
    assert!(html.contains("❌ Incorrect"));
    assert!(html.contains("⚠️ Unanswered"));
    assert!(html.contains("Your Answer: None"));
    assert!(html.contains("💡 Listen for the place name."));
    assert!(html.contains("Go to Home Page"));
    assert!(!html.contains("quiz-area"), "practice area still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn filters_narrow_the_review_list() {
    let mut harness = submitted_attempt().await;

    harness.send(QuizIntent::SetFilter(ReviewFilter::Correct));
    let html = harness.render();
    assert!(html.contains("Where will they meet?"));
    assert!(!html.contains("What time does the class start?"));
    assert!(!html.contains("How will he travel?"));
    assert!(html.contains("result-filter-btn active"));

    harness.send(QuizIntent::SetFilter(ReviewFilter::Unanswered));
    let html = harness.render();
    assert!(html.contains("What time does the class start?"));
    assert!(!html.contains("Where will they meet?"));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_filter_shows_message() {
    let mut harness = setup_view_harness(SAMPLE_BANK).await;
    harness.send(QuizIntent::TogglePart(PartId::new(2)));
    harness.send(QuizIntent::Start);
    harness.send(QuizIntent::Answer(QuestionId::new(3), letter('B')));
    harness.send(QuizIntent::Submit);
    harness.answer_prompt(Confirmation::Accepted);

    harness.send(QuizIntent::SetFilter(ReviewFilter::Wrong));
    let html = harness.render();
    assert!(html.contains(EMPTY_FILTER_MESSAGE), "missing empty message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn accepted_retake_returns_to_selection() {
    let mut harness = submitted_attempt().await;
    harness.send(QuizIntent::Retake);
    assert!(harness.render().contains("Wanna retake the test?"));

    harness.answer_prompt(Confirmation::Accepted);
    let html = harness.render();
    assert!(html.contains("Choose the part(s)"), "selection missing in {html}");
    assert!(!html.contains("Accuracy"));
    assert!(!html.contains("Start Practice"));
}

#[tokio::test(flavor = "current_thread")]
async fn declined_retake_keeps_results() {
    let mut harness = submitted_attempt().await;
    harness.send(QuizIntent::Retake);
    harness.answer_prompt(Confirmation::Declined);
    let html = harness.render();
    assert!(html.contains("Accuracy"));
    assert!(!html.contains("Wanna retake the test?"));
}

#[tokio::test(flavor = "current_thread")]
async fn home_link_goes_through_the_opener() {
    let mut harness = submitted_attempt().await;
    harness.open_home("https://example.com/home");
    assert_eq!(harness.opener.opened(), vec!["https://example.com/home".to_string()]);
}
