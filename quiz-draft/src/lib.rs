//! # quiz-draft
//!
//! Author multiple-choice quizzes in memory. Surface-agnostic.
//!
//! This crate provides the [`QuizEditor`], which binds a quiz draft to a
//! rendering surface: every mutation is applied to the draft and the
//! surface is told what widget to create or reconfigure. Surfaces are
//! separate implementations of the `AuthoringSurface` trait - a browser
//! DOM, a TUI, or the [`RecordingSurface`] shipped here for tests.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_draft::{QuizEditor, RecordingSurface};
//!
//! let mut editor = QuizEditor::new(RecordingSurface::new());
//! editor.set_title("Rust Basics");
//!
//! let question = editor.add_question();
//! editor.set_question_text(question, "What does `let mut` declare?");
//! editor.set_choice_text(question, 0, "A mutable binding");
//! editor.add_choice(question);
//! editor.set_choice_text(question, 1, "A constant");
//! editor.set_choice_selected(question, 0, true);
//!
//! editor.validate().unwrap();
//! let document = editor.to_document();
//! assert_eq!(document.questions[0].answers, [0]);
//! ```
//!
//! Submitting the resulting `QuizDocument` to the storage endpoint is the
//! job of the `quiz-draft-http` crate.

// Re-export all types from quiz-draft-types
pub use quiz_draft_types::*;

mod editor;
pub use editor::QuizEditor;

// Recording surface for testing authoring flows without a UI
mod test_surface;
pub use test_surface::{RecordingSurface, SurfaceEvent};
