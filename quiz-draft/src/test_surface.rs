//! Recording surface for testing authoring flows without a UI.
//!
//! `RecordingSurface` implements `AuthoringSurface` by appending every
//! notification to an event list, so tests can assert exactly which
//! widgets the editor asked for and in what order.
//!
//! # Example
//!
//! ```rust
//! use quiz_draft::{QuizEditor, RecordingSurface, SurfaceEvent};
//!
//! let mut editor = QuizEditor::new(RecordingSurface::new());
//! let id = editor.add_question();
//!
//! assert_eq!(
//!     editor.surface().events(),
//!     [SurfaceEvent::QuestionAdded { id, choices: 1 }]
//! );
//! ```

use quiz_draft_types::{AnswerMode, AuthoringSurface, QuestionDraft, QuestionId};

/// What a surface was asked to do, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A widget group was requested for a new question, including rows
    /// for its initial choices.
    QuestionAdded { id: QuestionId, choices: usize },

    /// A choice row was requested within an existing group, with the
    /// input capability implied by `mode`.
    ChoiceAdded {
        id: QuestionId,
        index: usize,
        mode: AnswerMode,
    },

    /// All choice inputs under a question switch their capability.
    ModeChanged { id: QuestionId, mode: AnswerMode },
}

/// A rendering surface that records every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Create a new surface with an empty event list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded events in arrival order.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Forget all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl AuthoringSurface for RecordingSurface {
    fn question_added(&mut self, question: &QuestionDraft) {
        self.events.push(SurfaceEvent::QuestionAdded {
            id: question.id(),
            choices: question.choices().len(),
        });
    }

    fn choice_added(&mut self, id: QuestionId, index: usize, mode: AnswerMode) {
        self.events.push(SurfaceEvent::ChoiceAdded { id, index, mode });
    }

    fn mode_changed(&mut self, id: QuestionId, mode: AnswerMode) {
        self.events.push(SurfaceEvent::ModeChanged { id, mode });
    }
}
