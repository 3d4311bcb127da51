use thiserror::Error;

/// Failures of the bounded stream consumers.
/// The combinators themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
  /// The stream had more elements than the caller was willing to collect.
  #[error("stream has more than {limit} elements")]
  LimitExceeded { limit: usize },

  #[error("index {index} is out of range for a stream of length {len}")]
  IndexOutOfRange { index: usize, len: usize }
}
