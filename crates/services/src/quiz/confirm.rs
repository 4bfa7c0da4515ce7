/// Question put to the user before a destructive quiz transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    Submit,
    Retake,
}

impl ConfirmPrompt {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ConfirmPrompt::Submit => "Are you sure you want to submit?",
            ConfirmPrompt::Retake => "Wanna retake the test?",
        }
    }
}

/// Answer to a [`ConfirmPrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Confirmation::Accepted)
    }
}

/// Yes/no gate consulted before submitting or retaking.
///
/// A modal dialog resolves the prompt first and then hands its answer over as
/// a [`Confirmation`], which is itself a gate.
pub trait ConfirmationGate {
    fn confirm(&self, prompt: ConfirmPrompt) -> Confirmation;
}

impl ConfirmationGate for Confirmation {
    fn confirm(&self, _prompt: ConfirmPrompt) -> Confirmation {
        *self
    }
}
