use thiserror::Error;

/// Error types for `GrowableSequence` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SequenceError {
    /// Index falls outside the valid range of the attempted operation
    #[error("Index out of range: index {index} is outside sequence of length {length}")]
    IndexOutOfRange {
        /// Index that was supplied
        index: usize,
        /// Length of the sequence when the call was made
        length: usize,
    },
    /// Invalid parameter passed to `SequenceConfig`
    #[error("Invalid configuration: {parameter} cannot be {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
