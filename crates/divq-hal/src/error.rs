//! Error types for the HAL crate.

use thiserror::Error;

use crate::qubit::QubitId;

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// A gate references a qubit the register does not have.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the register.
        num_qubits: usize,
    },

    /// The same qubit appears twice among the controls and targets of a gate.
    #[error("Qubit {0} used more than once in a single gate")]
    DuplicateQubit(QubitId),

    /// A gate was given no qubits to act on.
    #[error("Gate requires at least one {0} qubit")]
    EmptyQubitSet(&'static str),

    /// Dense unitary does not match the number of target qubits.
    #[error("Matrix must be {expected}x{expected}, got {rows}x{cols}")]
    MatrixDimension {
        /// Required dimension (2^targets).
        expected: usize,
        /// Rows supplied.
        rows: usize,
        /// Columns supplied.
        cols: usize,
    },

    /// Basis-state index beyond the register's state space.
    #[error("Basis index {index} out of range for state space of size {size}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Size of the state space (2^qubits).
        size: usize,
    },

    /// Register exceeds backend capacity.
    #[error("Register of {requested} qubits exceeds backend limit of {max}")]
    RegisterTooLarge {
        /// Requested width.
        requested: usize,
        /// Backend limit.
        max: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
