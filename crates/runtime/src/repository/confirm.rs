//! Propose-then-confirm protocol for destructive actions.

/// A pending destructive action awaiting the user's answer.
///
/// Produced by a `propose_*` call and consumed by the matching `confirm_*`.
/// Dropping it declines the action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a confirmation does nothing until it is confirmed"]
pub struct Confirmation<T> {
    subject: T,
    prompt: String,
}

impl<T> Confirmation<T> {
    pub(crate) fn new(subject: T, prompt: impl Into<String>) -> Self {
        Self {
            subject,
            prompt: prompt.into(),
        }
    }

    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Question to show the user.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub(crate) fn into_subject(self) -> T {
        self.subject
    }
}

/// The list entry a deletion was proposed for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deletion {
    pub index: usize,
    pub name: String,
}
