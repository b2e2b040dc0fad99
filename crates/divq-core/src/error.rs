//! Error types for the core crate.

use thiserror::Error;

/// Errors produced while building or running a division-property search.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Marking register width must be between 1 and [`crate::MAX_WIDTH`].
    #[error("marking width must be in 1..={max}, got {width}")]
    InvalidWidth {
        /// Requested width.
        width: usize,
        /// Largest supported width.
        max: usize,
    },

    /// A multiset element has bits above the marking width.
    #[error("element #{index} ({value:#x}) does not fit in {width} bits")]
    ElementTooWide {
        /// Position in the multiset.
        index: usize,
        /// The element.
        value: u64,
        /// Marking width.
        width: usize,
    },

    /// More elements than the marking register can index.
    #[error("multiset has {len} elements but a {width}-qubit register indexes only {capacity}")]
    TooManyElements {
        /// Cardinality of the multiset.
        len: usize,
        /// Marking width.
        width: usize,
        /// 2^width.
        capacity: usize,
    },

    /// Control parameter outside `[0, 2^width)`.
    #[error("control parameter u = {u:#x} does not fit in {width} bits")]
    ControlOutOfRange {
        /// The control parameter.
        u: u64,
        /// Marking width.
        width: usize,
    },

    /// Counting configuration rejected by validation.
    #[error("invalid counting configuration: {0}")]
    InvalidConfig(String),

    /// Backend primitive failed.
    #[error("backend error: {0}")]
    Hal(#[from] divq_hal::HalError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
