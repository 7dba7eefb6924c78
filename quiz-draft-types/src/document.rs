use serde::{Deserialize, Serialize};

use crate::AnswerMode;

/// The wire format submitted to the storage endpoint.
///
/// This is exactly what goes over the wire as JSON; draft-internal state
/// such as question ids is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDocument {
    /// Quiz title as entered by the author.
    pub title: String,

    /// Questions in authoring order.
    pub questions: Vec<QuestionEntry>,
}

/// One question of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionEntry {
    /// The question text.
    pub text: String,

    /// Accompanying code snippet; serialized as an explicit `null` when absent.
    pub code: Option<String>,

    /// Single- or multiple-answer question.
    #[serde(rename = "type")]
    pub mode: AnswerMode,

    /// Choice texts in authoring order.
    pub options: Vec<String>,

    /// Indices into `options` marked correct, in ascending order.
    pub answers: Vec<usize>,
}

impl QuestionEntry {
    /// Resolve the answer indices against the option texts.
    ///
    /// Out-of-range indices are skipped.
    pub fn selected_options(&self) -> impl Iterator<Item = &str> {
        self.answers
            .iter()
            .filter_map(|&index| self.options.get(index).map(String::as_str))
    }
}

/// Identifier and title of a stored quiz, as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Server-assigned quiz identifier.
    pub id: String,

    /// Quiz title.
    pub title: String,
}
