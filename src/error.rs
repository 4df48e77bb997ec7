//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`PipelineError`] as the error type.
//!
//! Empty input is not an error: analysis of blank text returns `Ok(None)`.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`PipelineError`] as the error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The unified error type for all crate errors.
///
/// # Example
///
/// ```rust
/// use lyric_sentiment::error::PipelineError;
///
/// fn handle_error(e: PipelineError) {
///     match &e {
///         PipelineError::InvalidConfig(_) => {
///             // Caller bug - fix the chunk size
///         }
///         PipelineError::Scoring(_) => {
///             // Polarity model failed - nothing was scored
///         }
///         PipelineError::Unexpected(_) => {
///             // Internal error - report bug
///             eprintln!("Internal error: {e}");
///         }
///         _ => {
///             // Future error variants
///         }
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// Invalid pipeline configuration, such as a zero chunk size.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The polarity model failed or produced an out-of-range score.
    #[error("scoring failed: {0}")]
    Scoring(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl From<serde_json::Error> for PipelineError {
    fn from(value: serde_json::Error) -> Self {
        PipelineError::Unexpected(value.to_string())
    }
}
