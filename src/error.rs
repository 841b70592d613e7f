use thiserror::Error;

/// Errors raised by the generation engine.
///
/// All inputs are static tables, so a failure means a defect in those
/// tables, not a transient condition. There is no retry path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    /// A template list is empty, a template references an undeclared
    /// placeholder, or a format spec cannot be applied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A weighted candidate set is empty or carries a zero weight.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
