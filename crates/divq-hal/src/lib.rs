//! divq Hardware Abstraction Layer
//!
//! The quantum-counting pipeline in `divq-core` never touches amplitudes
//! directly. It drives a [`Register`] obtained from a [`Backend`] through a
//! small, fixed set of primitives:
//!
//! | Primitive | Method |
//! |-----------|--------|
//! | allocate / release | [`Backend::create_register`] / `Drop` |
//! | reset | [`Register::init_zero_state`] |
//! | single-qubit | [`Register::hadamard`], [`Register::pauli_x`] |
//! | controlled phase | [`Register::controlled_phase_shift`] |
//! | controlled dense unitary | [`Register::multi_controlled_unitary`] |
//! | phase flip | [`Register::multi_controlled_phase_flip`] |
//! | readout | [`Register::probability`] |
//!
//! # Supported Backends
//!
//! | Backend | Crate |
//! |---------|-------|
//! | Local statevector simulator | `divq-adapter-sim` |

pub mod backend;
pub mod error;
pub mod qubit;
pub mod register;

pub use backend::{Backend, BackendConfig, BackendFactory};
pub use error::{HalError, HalResult};
pub use qubit::{QubitId, qubit_range};
pub use register::{Register, validate_matrix, validate_qubits};
