//! divq Local Statevector Simulator
//!
//! This crate provides the local backend the division-property search runs
//! on. It keeps one dense statevector per register, which gives exact
//! probabilities but limits registers to ~20-25 qubits. The counting
//! pipeline needs `p + n` qubits (9 with the default 6-qubit counting
//! register and 3-qubit marking register).
//!
//! # Performance
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 9 | ~8 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//! | 25 | ~512 MB |
//!
//! # Example
//!
//! ```
//! use divq_adapter_sim::SimulatorBackend;
//! use divq_hal::{Backend, QubitId};
//!
//! let backend = SimulatorBackend::new();
//! let mut reg = backend.create_register(2)?;
//! reg.hadamard(QubitId(0))?;
//! assert!((reg.probability(1)? - 0.5).abs() < 1e-12);
//! # Ok::<(), divq_hal::HalError>(())
//! ```

mod simulator;
mod statevector;

pub use simulator::{SIMULATOR_QUBIT_LIMIT, SimRegister, SimulatorBackend};
