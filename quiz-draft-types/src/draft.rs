use std::fmt;

use crate::{AnswerMode, QuestionEntry, QuizDocument, ValidationError};

/// Identity of a question within one draft.
///
/// Assigned from a counter local to the owning `QuizDraft`: strictly
/// increasing in creation order, never reused. The id only correlates a
/// question with its rendered widget group; it does not appear in the
/// wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Get the raw numeric value, e.g. for widget element ids.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable answer option belonging to a question.
///
/// The index position within the owning question's choice list is the
/// identifier used in the serialized answers list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceDraft {
    /// Display text of the option.
    pub text: String,

    /// Whether this option is currently marked as a correct answer.
    pub selected: bool,
}

/// A single question being authored.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    /// Draft-local identity, assigned at creation.
    id: QuestionId,

    /// The question text shown to quiz takers.
    text: String,

    /// Optional code snippet accompanying the question.
    code_snippet: Option<String>,

    /// Single- or multiple-answer input semantics.
    mode: AnswerMode,

    /// The answer options, in authoring order.
    choices: Vec<ChoiceDraft>,
}

impl QuestionDraft {
    /// A new question starts with empty text, no code snippet, single-answer
    /// mode, and exactly one empty unselected choice.
    fn new(id: QuestionId) -> Self {
        Self {
            id,
            text: String::new(),
            code_snippet: None,
            mode: AnswerMode::Single,
            choices: vec![ChoiceDraft::default()],
        }
    }

    /// Get this question's draft-local identity.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the code snippet, if one was entered.
    pub fn code_snippet(&self) -> Option<&str> {
        self.code_snippet.as_deref()
    }

    /// Get the current answer mode.
    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    /// Get the answer options in authoring order.
    pub fn choices(&self) -> &[ChoiceDraft] {
        &self.choices
    }

    fn to_entry(&self) -> QuestionEntry {
        QuestionEntry {
            text: self.text.clone(),
            code: self.code_snippet.clone(),
            mode: self.mode,
            options: self.choices.iter().map(|choice| choice.text.clone()).collect(),
            answers: self
                .choices
                .iter()
                .enumerate()
                .filter_map(|(index, choice)| choice.selected.then_some(index))
                .collect(),
        }
    }
}

/// In-memory, unsaved representation of a quiz being authored.
///
/// The draft owns its questions and their choices exclusively and knows
/// nothing about how it is displayed; a rendering surface mirrors it
/// through the editor. Mutators identify questions by `QuestionId` and
/// silently ignore unknown ids or out-of-range choice indices - those
/// indicate a caller bug, not a user-facing failure.
#[derive(Debug, Clone, Default)]
pub struct QuizDraft {
    title: String,
    questions: Vec<QuestionDraft>,
    next_id: u32,
}

impl QuizDraft {
    /// Start an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the quiz title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the questions in authoring order.
    pub fn questions(&self) -> &[QuestionDraft] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&QuestionDraft> {
        self.questions.iter().find(|question| question.id == id)
    }

    fn question_mut(&mut self, id: QuestionId) -> Option<&mut QuestionDraft> {
        self.questions.iter_mut().find(|question| question.id == id)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the draft has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Set the quiz title.
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    /// Append a new question and return its identity.
    ///
    /// The question starts in single-answer mode with one empty choice.
    pub fn add_question(&mut self) -> QuestionId {
        self.next_id += 1;
        let id = QuestionId(self.next_id);
        self.questions.push(QuestionDraft::new(id));
        id
    }

    /// Append an unselected choice to the identified question, returning
    /// the new choice's index. Returns `None` on an unknown id.
    pub fn add_choice(&mut self, id: QuestionId) -> Option<usize> {
        let question = self.question_mut(id)?;
        question.choices.push(ChoiceDraft::default());
        Some(question.choices.len() - 1)
    }

    /// Set the answer mode of the identified question.
    ///
    /// The capability change applies to future selections only; choices
    /// already selected stay selected.
    pub fn set_question_mode(&mut self, id: QuestionId, mode: AnswerMode) {
        let Some(question) = self.question_mut(id) else {
            return;
        };
        question.mode = mode;
    }

    /// Set the text of the identified question.
    pub fn set_question_text(&mut self, id: QuestionId, text: impl Into<String>) {
        let Some(question) = self.question_mut(id) else {
            return;
        };
        question.text = text.into();
    }

    /// Set the code snippet of the identified question.
    ///
    /// Empty text clears the snippet, which serializes as `null`.
    pub fn set_code_snippet(&mut self, id: QuestionId, text: impl Into<String>) {
        let Some(question) = self.question_mut(id) else {
            return;
        };
        let text = text.into();
        question.code_snippet = if text.is_empty() { None } else { Some(text) };
    }

    /// Set the text of a choice, identified by question id and index.
    pub fn set_choice_text(&mut self, id: QuestionId, index: usize, text: impl Into<String>) {
        let Some(question) = self.question_mut(id) else {
            return;
        };
        let Some(choice) = question.choices.get_mut(index) else {
            return;
        };
        choice.text = text.into();
    }

    /// Mark a choice as selected or unselected.
    ///
    /// Selecting a choice on a single-answer question deselects all its
    /// siblings first; last write wins.
    pub fn set_choice_selected(&mut self, id: QuestionId, index: usize, selected: bool) {
        let Some(question) = self.question_mut(id) else {
            return;
        };
        if index >= question.choices.len() {
            return;
        }
        if selected && question.mode.is_exclusive() {
            for choice in &mut question.choices {
                choice.selected = false;
            }
        }
        question.choices[index].selected = selected;
    }

    /// Check that the draft is ready for submission.
    ///
    /// The only requirement is a non-blank title. Questions and choices
    /// are accepted as entered, including empty ones.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(())
    }

    /// Serialize the draft into the wire format.
    ///
    /// Questions and options appear in authoring order; each question's
    /// answers list collects the indices of its selected options in
    /// ascending order.
    pub fn to_document(&self) -> QuizDocument {
        QuizDocument {
            title: self.title.clone(),
            questions: self.questions.iter().map(QuestionDraft::to_entry).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ids_are_unique_and_increasing() {
        let mut draft = QuizDraft::new();
        let ids: Vec<_> = (0..5).map(|_| draft.add_question()).collect();

        assert_eq!(draft.len(), 5);
        for pair in ids.windows(2) {
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn new_question_has_one_empty_choice() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();

        let question = draft.question(id).unwrap();
        assert_eq!(question.text(), "");
        assert_eq!(question.code_snippet(), None);
        assert_eq!(question.mode(), AnswerMode::Single);
        assert_eq!(question.choices().len(), 1);
        assert_eq!(question.choices()[0], ChoiceDraft::default());
    }

    #[test]
    fn add_choice_appends_unselected() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();

        assert_eq!(draft.add_choice(id), Some(1));
        assert_eq!(draft.add_choice(id), Some(2));

        let question = draft.question(id).unwrap();
        assert_eq!(question.choices().len(), 3);
        assert!(question.choices().iter().all(|choice| !choice.selected));
    }

    #[test]
    fn mode_round_trip_preserves_choices() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();
        draft.add_choice(id);
        draft.add_choice(id);
        for (index, text) in ["a", "b", "c"].iter().enumerate() {
            draft.set_choice_text(id, index, *text);
        }

        draft.set_question_mode(id, AnswerMode::Multiple);
        draft.set_question_mode(id, AnswerMode::Single);

        let texts: Vec<_> = draft.question(id).unwrap().choices().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn single_mode_selection_is_exclusive() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();
        draft.add_choice(id);
        draft.add_choice(id);

        draft.set_choice_selected(id, 1, true);
        draft.set_choice_selected(id, 0, true);

        let selected: Vec<_> = draft
            .question(id)
            .unwrap()
            .choices()
            .iter()
            .map(|choice| choice.selected)
            .collect();
        assert_eq!(selected, [true, false, false]);
    }

    #[test]
    fn multiple_mode_selections_are_independent() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();
        draft.add_choice(id);
        draft.add_choice(id);
        draft.set_question_mode(id, AnswerMode::Multiple);

        draft.set_choice_selected(id, 0, true);
        draft.set_choice_selected(id, 2, true);
        draft.set_choice_selected(id, 0, false);

        let selected: Vec<_> = draft
            .question(id)
            .unwrap()
            .choices()
            .iter()
            .map(|choice| choice.selected)
            .collect();
        assert_eq!(selected, [false, false, true]);
    }

    #[test]
    fn switching_to_single_keeps_existing_selections() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();
        draft.add_choice(id);
        draft.set_question_mode(id, AnswerMode::Multiple);
        draft.set_choice_selected(id, 0, true);
        draft.set_choice_selected(id, 1, true);

        // No retroactive clearing; exclusivity applies to the next selection.
        draft.set_question_mode(id, AnswerMode::Single);
        let question = draft.question(id).unwrap();
        assert!(question.choices().iter().all(|choice| choice.selected));
    }

    #[test]
    fn unknown_question_id_is_ignored() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();
        let mut other = QuizDraft::new();
        let stale = other.add_question();
        other.add_question();
        let stale_second = other.questions()[1].id();

        draft.set_question_text(stale_second, "lost");
        draft.set_question_mode(stale_second, AnswerMode::Multiple);
        assert_eq!(draft.add_choice(stale_second), None);

        // `stale` collides with `id` numerically, which is fine: ids are
        // only meaningful within one draft.
        assert_eq!(stale.value(), id.value());
        let question = draft.question(id).unwrap();
        assert_eq!(question.text(), "");
        assert_eq!(question.choices().len(), 1);
    }

    #[test]
    fn out_of_range_choice_index_is_ignored() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();

        draft.set_choice_text(id, 7, "nope");
        draft.set_choice_selected(id, 7, true);

        let question = draft.question(id).unwrap();
        assert_eq!(question.choices().len(), 1);
        assert!(!question.choices()[0].selected);
    }

    #[test]
    fn empty_code_snippet_clears() {
        let mut draft = QuizDraft::new();
        let id = draft.add_question();

        draft.set_code_snippet(id, "fn main() {}");
        assert_eq!(draft.question(id).unwrap().code_snippet(), Some("fn main() {}"));

        draft.set_code_snippet(id, "");
        assert_eq!(draft.question(id).unwrap().code_snippet(), None);
    }

    #[test]
    fn validate_requires_a_title() {
        let mut draft = QuizDraft::new();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));

        draft.set_title("   ");
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));

        // A titled draft is valid even with zero questions.
        draft.set_title("Rust Basics");
        assert_eq!(draft.validate(), Ok(()));
    }
}
