mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{
    OptionVm, PartChoiceVm, PracticeVm, QuestionVm, QuizIntent, QuizOutcome, apply_intent,
    map_part_choices, map_practice, resolve_prompt,
};
pub use results_vm::{
    BreakdownVm, EMPTY_FILTER_MESSAGE, FilterVm, ResultItemVm, ResultsVm, map_results,
};
pub use time_fmt::format_local_datetime;
