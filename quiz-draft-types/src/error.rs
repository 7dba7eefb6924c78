/// Error type for pre-submission validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The quiz has no title (empty or whitespace-only).
    ///
    /// Surfaced as a prompt to the author; submission is blocked before
    /// any network call is made.
    #[error("please enter a title for the quiz")]
    MissingTitle,
}
