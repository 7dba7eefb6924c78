use quiz_draft_types::{
    AnswerMode, AuthoringSurface, QuestionId, QuizDocument, QuizDraft, ValidationError,
};

/// Binds one draft to one rendering surface.
///
/// Every mutation is applied to the draft immediately and atomically -
/// there is no batching or debouncing - and the structural ones
/// ([`add_question`](Self::add_question), [`add_choice`](Self::add_choice),
/// [`set_question_mode`](Self::set_question_mode)) then notify the
/// surface so it can create or reconfigure the matching widgets. The
/// editor is the draft's only writer.
///
/// Field mutators on unknown question ids are silently ignored, matching
/// the draft's contract: a stale id is a bug in the calling layer, not
/// something to surface to the author.
#[derive(Debug)]
pub struct QuizEditor<S> {
    draft: QuizDraft,
    surface: S,
}

impl<S: AuthoringSurface> QuizEditor<S> {
    /// Start authoring an empty quiz on the given surface.
    pub fn new(surface: S) -> Self {
        Self {
            draft: QuizDraft::new(),
            surface,
        }
    }

    /// Read access to the draft being authored.
    pub fn draft(&self) -> &QuizDraft {
        &self.draft
    }

    /// Read access to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Append a new question and ask the surface for its widget group.
    pub fn add_question(&mut self) -> QuestionId {
        let id = self.draft.add_question();
        if let Some(question) = self.draft.question(id) {
            self.surface.question_added(question);
        }
        id
    }

    /// Append a choice to a question and ask the surface for its row.
    ///
    /// The new row's input capability follows the question's current
    /// mode. Returns the new choice's index, or `None` for unknown ids.
    pub fn add_choice(&mut self, id: QuestionId) -> Option<usize> {
        let index = self.draft.add_choice(id)?;
        if let Some(question) = self.draft.question(id) {
            self.surface.choice_added(id, index, question.mode());
        }
        Some(index)
    }

    /// Switch a question between single- and multiple-answer semantics.
    ///
    /// The surface is told to swap the selection capability of every
    /// choice input under the question. Selections already made are left
    /// as they are.
    pub fn set_question_mode(&mut self, id: QuestionId, mode: AnswerMode) {
        if self.draft.question(id).is_none() {
            return;
        }
        self.draft.set_question_mode(id, mode);
        self.surface.mode_changed(id, mode);
    }

    /// Set the quiz title.
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.draft.set_title(text);
    }

    /// Set a question's text.
    pub fn set_question_text(&mut self, id: QuestionId, text: impl Into<String>) {
        self.draft.set_question_text(id, text);
    }

    /// Set a question's code snippet; empty text clears it.
    pub fn set_code_snippet(&mut self, id: QuestionId, text: impl Into<String>) {
        self.draft.set_code_snippet(id, text);
    }

    /// Set a choice's text.
    pub fn set_choice_text(&mut self, id: QuestionId, index: usize, text: impl Into<String>) {
        self.draft.set_choice_text(id, index, text);
    }

    /// Mark a choice as selected or unselected, honoring the question's mode.
    pub fn set_choice_selected(&mut self, id: QuestionId, index: usize, selected: bool) {
        self.draft.set_choice_selected(id, index, selected);
    }

    /// Check that the draft is ready for submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate()
    }

    /// Serialize the draft into the wire format.
    pub fn to_document(&self) -> QuizDocument {
        self.draft.to_document()
    }

    /// Tear the editor down, releasing the draft and the surface.
    pub fn into_parts(self) -> (QuizDraft, S) {
        (self.draft, self.surface)
    }
}
