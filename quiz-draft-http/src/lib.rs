//! HTTP submission sink for quiz-draft.
//!
//! This crate delivers serialized quiz documents to the storage service
//! and exposes the listing and deletion calls that service offers. It is
//! deliberately thin: one request per operation, no retries, no response
//! bodies parsed beyond the listing.
//!
//! # Example
//!
//! ```ignore
//! use quiz_draft::{QuizEditor, RecordingSurface};
//! use quiz_draft_http::QuizClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut editor = QuizEditor::new(RecordingSurface::new());
//!     editor.set_title("Rust Basics");
//!
//!     editor.validate()?;
//!     let client = QuizClient::default();
//!     client.submit(&editor.to_document()).await?;
//!     Ok(())
//! }
//! ```

mod client;

pub use client::QuizClient;
pub use client::SubmitError;
pub use client::DEFAULT_BASE_URL;
