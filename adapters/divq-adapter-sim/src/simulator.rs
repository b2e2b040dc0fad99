//! Simulator backend implementation.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::{debug, trace};

use divq_hal::{
    Backend, BackendConfig, BackendFactory, HalError, HalResult, QubitId, Register,
    validate_matrix, validate_qubits,
};

use crate::statevector::Statevector;

/// Default register limit; 20 qubits is a 16 MB statevector.
const DEFAULT_MAX_QUBITS: usize = 20;

/// Hard ceiling for `max_qubits`; 30 qubits is a 16 GB statevector.
pub const SIMULATOR_QUBIT_LIMIT: usize = 30;

/// Local simulator backend.
///
/// Every register is an independent dense statevector. Memory grows as
/// `16 · 2^n` bytes, so the backend refuses registers wider than
/// `max_qubits`.
#[derive(Debug, Clone)]
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Maximum number of qubits supported.
    max_qubits: usize,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a simulator with custom max qubits, clamped to
    /// [`SIMULATOR_QUBIT_LIMIT`].
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            max_qubits: max_qubits.min(SIMULATOR_QUBIT_LIMIT),
        }
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    fn create_register(&self, num_qubits: usize) -> HalResult<Box<dyn Register>> {
        if num_qubits > self.max_qubits {
            return Err(HalError::RegisterTooLarge {
                requested: num_qubits,
                max: self.max_qubits,
            });
        }
        debug!("Allocating {}-qubit statevector", num_qubits);
        Ok(Box::new(SimRegister {
            sv: Statevector::new(num_qubits),
        }))
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = match config.extra.get("max_qubits") {
            None => DEFAULT_MAX_QUBITS,
            Some(value) => value
                .as_u64()
                .and_then(|v| usize::try_from(v).ok())
                .filter(|&v| v <= SIMULATOR_QUBIT_LIMIT)
                .ok_or_else(|| {
                    HalError::Configuration(format!(
                        "invalid max_qubits: {value} (must be at most {SIMULATOR_QUBIT_LIMIT})"
                    ))
                })?,
        };

        Ok(Self { config, max_qubits })
    }
}

/// A register held by [`SimulatorBackend`].
pub struct SimRegister {
    sv: Statevector,
}

impl SimRegister {
    fn check(&self, groups: &[&[QubitId]]) -> HalResult<()> {
        validate_qubits(self.sv.num_qubits(), groups)
    }
}

impl Register for SimRegister {
    fn num_qubits(&self) -> usize {
        self.sv.num_qubits()
    }

    fn init_zero_state(&mut self) -> HalResult<()> {
        self.sv.reset();
        Ok(())
    }

    fn hadamard(&mut self, qubit: QubitId) -> HalResult<()> {
        self.check(&[&[qubit]])?;
        trace!("h {}", qubit);
        self.sv.apply_h(qubit.index());
        Ok(())
    }

    fn pauli_x(&mut self, qubit: QubitId) -> HalResult<()> {
        self.check(&[&[qubit]])?;
        trace!("x {}", qubit);
        self.sv.apply_x(qubit.index());
        Ok(())
    }

    fn controlled_phase_shift(
        &mut self,
        control: QubitId,
        target: QubitId,
        angle: f64,
    ) -> HalResult<()> {
        self.check(&[&[control, target]])?;
        trace!("cp({:.6}) {}, {}", angle, control, target);
        self.sv.apply_cp(control.index(), target.index(), angle);
        Ok(())
    }

    fn multi_controlled_unitary(
        &mut self,
        controls: &[QubitId],
        targets: &[QubitId],
        matrix: &Array2<Complex64>,
    ) -> HalResult<()> {
        if targets.is_empty() {
            return Err(HalError::EmptyQubitSet("target"));
        }
        self.check(&[controls, targets])?;
        validate_matrix(targets.len(), matrix)?;
        trace!("mcu {:?} -> {:?}", controls, targets);

        let ctrl_mask = controls.iter().map(|q| q.mask()).sum();
        let targets: Vec<usize> = targets.iter().map(|q| q.index()).collect();
        self.sv.apply_controlled_matrix(ctrl_mask, &targets, matrix);
        Ok(())
    }

    fn multi_controlled_phase_flip(&mut self, qubits: &[QubitId]) -> HalResult<()> {
        if qubits.is_empty() {
            return Err(HalError::EmptyQubitSet("control"));
        }
        self.check(&[qubits])?;
        trace!("mcz {:?}", qubits);
        self.sv
            .apply_phase_flip(qubits.iter().map(|q| q.mask()).sum());
        Ok(())
    }

    fn probability(&self, index: usize) -> HalResult<f64> {
        if index >= self.sv.dim() {
            return Err(HalError::IndexOutOfRange {
                index,
                size: self.sv.dim(),
            });
        }
        Ok(self.sv.probability(index))
    }
}

impl Drop for SimRegister {
    fn drop(&mut self) {
        trace!("Releasing {}-qubit statevector", self.sv.num_qubits());
    }
}
