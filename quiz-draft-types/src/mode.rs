use serde::{Deserialize, Serialize};

/// Whether a question accepts exactly one or several correct choices.
///
/// The mode decides the selection capability of every choice input under
/// a question: `Single` maps to mutually exclusive widgets (radio
/// buttons), `Multiple` to independently toggleable ones (checkboxes).
/// Switching the mode changes the capability going forward; it does not
/// touch selections already made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    /// Exactly one correct choice; selecting one deselects its siblings.
    #[default]
    Single,

    /// Any number of correct choices, each toggled independently.
    Multiple,
}

impl AnswerMode {
    /// Check whether selections are mutually exclusive in this mode.
    pub fn is_exclusive(self) -> bool {
        matches!(self, Self::Single)
    }
}
