use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use listening_core::Clock;
use listening_core::model::{
    OptionLetter, PartId, Question, QuestionBank, QuestionId, ReviewFilter, SubmissionReport,
};
use listening_core::playback::PlaybackController;
use tracing::{debug, info, warn};

use super::confirm::{ConfirmPrompt, Confirmation, ConfirmationGate};
use crate::error::QuizError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a quiz attempt currently stands.
///
/// `part_index` points into the ascending list of selected parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Selecting,
    Practicing { part_index: usize },
    Submitted,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizPhase::Selecting => write!(f, "selecting parts"),
            QuizPhase::Practicing { part_index } => {
                write!(f, "practicing selected part #{}", part_index + 1)
            }
            QuizPhase::Submitted => write!(f, "reviewing results"),
        }
    }
}

fn rejected<T>(err: QuizError) -> Result<T, QuizError> {
    warn!(error = %err, "quiz action rejected");
    Err(err)
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at the question bank: part selection, practice, submission and review.
///
/// The session stops the shared [`PlaybackController`] whenever the practice
/// area changes under the learner (next part, submit, retake).
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    controller: PlaybackController,
    clock: Clock,
    selected: BTreeSet<PartId>,
    phase: QuizPhase,
    answers: BTreeMap<QuestionId, OptionLetter>,
    transcripts: BTreeSet<QuestionId>,
    filter: ReviewFilter,
    report: Option<SubmissionReport>,
}

impl QuizSession {
    /// Fresh attempt with nothing selected.
    ///
    /// Submission timestamps come from `clock`, so tests stay deterministic.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, controller: PlaybackController, clock: Clock) -> Self {
        Self {
            bank,
            controller,
            clock,
            selected: BTreeSet::new(),
            phase: QuizPhase::Selecting,
            answers: BTreeMap::new(),
            transcripts: BTreeSet::new(),
            filter: ReviewFilter::All,
            report: None,
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Add or remove `part` from the selection and return whether it is now selected.
    ///
    /// Any previous answers or results are discarded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` once practice has started and
    /// `QuizError::UnknownPart` for parts the bank does not contain.
    pub fn toggle_part(&mut self, part: PartId) -> Result<bool, QuizError> {
        if self.phase != QuizPhase::Selecting {
            return rejected(self.wrong_phase("change the part selection"));
        }
        if !self.bank.contains_part(part) {
            return rejected(QuizError::UnknownPart(part));
        }

        let selected = if self.selected.remove(&part) {
            false
        } else {
            self.selected.insert(part)
        };
        self.answers.clear();
        self.report = None;
        self.filter = ReviewFilter::All;
        self.phase = QuizPhase::Selecting;
        debug!(part = %part, selected, "part toggled");
        Ok(selected)
    }

    /// Move from part selection to the first selected part.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptySelection` when nothing is selected and
    /// `QuizError::WrongPhase` if practice already started.
    pub fn start_practicing(&mut self) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Selecting {
            return rejected(self.wrong_phase("start practicing"));
        }
        if self.selected.is_empty() {
            return rejected(QuizError::EmptySelection);
        }

        self.phase = QuizPhase::Practicing { part_index: 0 };
        info!(
            parts = ?self.selected_parts(),
            questions = self.selected_questions().len(),
            "practice started"
        );
        Ok(())
    }

    /// Record `letter` as the answer to `question`, replacing any earlier choice.
    ///
    /// After submission the answers are frozen and this does nothing.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` before practice starts,
    /// `QuizError::QuestionNotSelected` for questions outside the selected parts
    /// and `QuizError::OptionOutOfRange` for letters past the last option.
    pub fn answer(&mut self, question: QuestionId, letter: OptionLetter) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::Selecting => return rejected(self.wrong_phase("answer a question")),
            QuizPhase::Submitted => {
                debug!(question = %question, "answer ignored after submission");
                return Ok(());
            }
            QuizPhase::Practicing { .. } => {}
        }

        let Some(found) = self.selected_question(question) else {
            return rejected(QuizError::QuestionNotSelected(question));
        };
        if !found.has_option(letter) {
            return rejected(QuizError::OptionOutOfRange { question, letter });
        }

        self.answers.insert(question, letter);
        debug!(question = %question, letter = %letter, "answer recorded");
        Ok(())
    }

    /// Stop any playing clip and advance to the next selected part.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LastPart` on the final part and
    /// `QuizError::WrongPhase` outside practice.
    pub fn next_part(&mut self) -> Result<PartId, QuizError> {
        let QuizPhase::Practicing { part_index } = self.phase else {
            return rejected(self.wrong_phase("move to the next part"));
        };
        let parts = self.selected_parts();
        let next = part_index + 1;
        let Some(part) = parts.get(next).copied() else {
            return rejected(QuizError::LastPart);
        };

        self.controller.stop_active();
        self.phase = QuizPhase::Practicing { part_index: next };
        debug!(part = %part, "moved to next part");
        Ok(part)
    }

    /// Check that [`QuizSession::submit`] would reach the confirmation step.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptySelection` when no question is selected,
    /// `QuizError::NotLastPart` before the last part and
    /// `QuizError::WrongPhase` outside practice.
    pub fn ensure_can_submit(&self) -> Result<(), QuizError> {
        if self.selected_questions().is_empty() {
            return Err(QuizError::EmptySelection);
        }
        match self.phase {
            QuizPhase::Practicing { .. } if self.is_last_part() => Ok(()),
            QuizPhase::Practicing { .. } => Err(QuizError::NotLastPart),
            _ => Err(self.wrong_phase("submit answers")),
        }
    }

    /// Score the attempt once `gate` confirms.
    ///
    /// Returns `Ok(None)` when the learner declines; nothing changes then.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`QuizSession::ensure_can_submit`], plus
    /// `QuizError::Report` if the attempt cannot be scored.
    pub fn submit(
        &mut self,
        gate: &dyn ConfirmationGate,
    ) -> Result<Option<&SubmissionReport>, QuizError> {
        if let Err(err) = self.ensure_can_submit() {
            return rejected(err);
        }
        if !gate.confirm(ConfirmPrompt::Submit).is_accepted() {
            debug!("submission declined");
            return Ok(None);
        }

        let report = {
            let questions = self.selected_questions();
            SubmissionReport::score(
                &questions,
                &self.selected_parts(),
                &self.answers,
                self.clock.now(),
            )?
        };

        self.controller.stop_active();
        info!(
            score = report.score_count(),
            total = report.total(),
            percent = report.percent(),
            "answers submitted"
        );
        self.phase = QuizPhase::Submitted;
        self.filter = ReviewFilter::All;
        Ok(Some(&*self.report.insert(report)))
    }

    /// Change which reviewed questions are listed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` before submission.
    pub fn set_filter(&mut self, filter: ReviewFilter) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Submitted {
            return rejected(self.wrong_phase("filter results"));
        }
        self.filter = filter;
        Ok(())
    }

    /// Show or hide the transcript of a selected question; returns whether it is now shown.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::QuestionNotSelected` for questions outside the selection.
    pub fn toggle_transcript(&mut self, question: QuestionId) -> Result<bool, QuizError> {
        if self.selected_question(question).is_none() {
            return rejected(QuizError::QuestionNotSelected(question));
        }
        let shown = if self.transcripts.remove(&question) {
            false
        } else {
            self.transcripts.insert(question)
        };
        Ok(shown)
    }

    /// Throw the attempt away and start over on the same bank once `gate` confirms.
    pub fn retake(&mut self, gate: &dyn ConfirmationGate) -> Confirmation {
        let confirmation = gate.confirm(ConfirmPrompt::Retake);
        if confirmation.is_accepted() {
            self.controller.stop_active();
            *self = Self::new(
                Arc::clone(&self.bank),
                self.controller.clone(),
                self.clock,
            );
            info!("quiz reset for retake");
        } else {
            debug!("retake declined");
        }
        confirmation
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != QuizPhase::Selecting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == QuizPhase::Submitted
    }

    #[must_use]
    pub fn filter(&self) -> ReviewFilter {
        self.filter
    }

    #[must_use]
    pub fn report(&self) -> Option<&SubmissionReport> {
        self.report.as_ref()
    }

    /// Every part in the bank, ascending.
    #[must_use]
    pub fn available_parts(&self) -> Vec<PartId> {
        self.bank.parts()
    }

    /// Selected parts, ascending; this is also the practice order.
    #[must_use]
    pub fn selected_parts(&self) -> Vec<PartId> {
        self.selected.iter().copied().collect()
    }

    #[must_use]
    pub fn is_selected(&self, part: PartId) -> bool {
        self.selected.contains(&part)
    }

    /// Part being practiced, if practice is underway.
    #[must_use]
    pub fn current_part(&self) -> Option<PartId> {
        match self.phase {
            QuizPhase::Practicing { part_index } => self.selected.iter().nth(part_index).copied(),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_part_questions(&self) -> Vec<&Question> {
        self.current_part()
            .map(|part| self.bank.questions_in_part(part))
            .unwrap_or_default()
    }

    /// Questions of all selected parts in bank order.
    #[must_use]
    pub fn selected_questions(&self) -> Vec<&Question> {
        self.bank.questions_in_parts(&self.selected)
    }

    #[must_use]
    pub fn is_last_part(&self) -> bool {
        match self.phase {
            QuizPhase::Practicing { part_index } => part_index + 1 >= self.selected.len(),
            _ => false,
        }
    }

    #[must_use]
    pub fn selected_answer(&self, question: QuestionId) -> Option<OptionLetter> {
        self.answers.get(&question).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_transcript_shown(&self, question: QuestionId) -> bool {
        self.transcripts.contains(&question)
    }

    /// Selected questions that pass the current review filter; empty before submission.
    #[must_use]
    pub fn filtered_questions(&self) -> Vec<&Question> {
        match &self.report {
            Some(report) => report.filter(&self.selected_questions(), self.filter),
            None => Vec::new(),
        }
    }

    fn selected_question(&self, id: QuestionId) -> Option<&Question> {
        self.bank
            .question(id)
            .filter(|question| self.selected.contains(&question.part()))
    }

    fn wrong_phase(&self, action: &'static str) -> QuizError {
        QuizError::WrongPhase {
            action,
            phase: self.phase,
        }
    }
}
