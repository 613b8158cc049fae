//! Error type shared by all model operations.

use thiserror::Error;

/// Errors raised while building, transcoding or evaluating a `BooleanModel`.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No topology, file or equation list was given to the constructor.
    #[error("Please provide a model, a file or a list of equations for the initialization.")]
    MissingSource,

    #[error("Error reading file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("The extension of `{0}` needs to be .bnet.")]
    InvalidExtension(String),

    /// A `.bnet` line that cannot be read as `TARGET, EXPRESSION`.
    #[error("Invalid equation `{line}`: {reason}")]
    InvalidEquation { line: String, reason: String },

    #[error("String \"{0}\" is not a valid regulation.")]
    InvalidRegulation(String),

    #[error("Topology index {index} is out of range (size {size}).")]
    TopologyIndex { index: usize, size: usize },

    #[error("Invalid chromosome length: expected {expected}, got {actual}")]
    ChromosomeLength { expected: usize, actual: usize },

    /// A chromosome position holds something other than `0` or `1`.
    #[error("Invalid chromosome value {value} at position {index}: expected 0 or 1")]
    InvalidBit { index: usize, value: u8 },

    #[error("Duplicate equation for node `{0}`.")]
    DuplicateTarget(String),

    /// Replacement equations do not describe the same nodes as the baseline.
    #[error("Equations do not match the model: {0}")]
    EquationMismatch(String),

    #[error("No attractors found. Ensure calculate_attractors() has been called.")]
    NoAttractors,

    #[error("Invalid model outputs: {0}")]
    InvalidOutputs(String),

    #[error("Unknown mutation type `{0}` (expected topology, balanced or mixed).")]
    UnknownMutationType(String),

    /// Error reported by an external attractor solver, passed through unmodified.
    #[error("Attractor solver failed: {0}")]
    Solver(String),
}

/// A specialized `Result` type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = ModelError::ChromosomeLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Invalid chromosome length: expected 4, got 3");

        let err = ModelError::InvalidBit { index: 3, value: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid chromosome value 2 at position 3: expected 0 or 1"
        );

        let err = ModelError::InvalidExtension("model.txt".to_string());
        assert_eq!(err.to_string(), "The extension of `model.txt` needs to be .bnet.");
    }
}
