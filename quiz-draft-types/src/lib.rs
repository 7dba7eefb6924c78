//! Core types for the quiz-draft crates.
//!
//! This crate provides the foundational types for authoring quizzes:
//! - `QuizDraft`, `QuestionDraft`, `ChoiceDraft` - the in-memory draft tree
//! - `AnswerMode` - single- versus multiple-answer input semantics
//! - `QuizDocument` and `QuestionEntry` - the JSON wire format
//! - `AuthoringSurface` trait - for implementing rendering surfaces

mod mode;
pub use mode::AnswerMode;

mod draft;
pub use draft::{ChoiceDraft, QuestionDraft, QuestionId, QuizDraft};

mod document;
pub use document::{QuestionEntry, QuizDocument, QuizSummary};

mod error;
pub use error::ValidationError;

mod traits;
pub use traits::AuthoringSurface;
