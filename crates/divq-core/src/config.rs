//! Counting-pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The truncated π used by the first published runs.
#[allow(clippy::approx_constant)]
pub const LEGACY_PI: f64 = 3.14;

/// Which value of π drives the QFT angles and the count formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiMode {
    /// `std::f64::consts::PI`.
    #[default]
    Exact,
    /// [`LEGACY_PI`], for bit-exact reproduction of published estimates.
    Legacy,
}

impl PiMode {
    /// The numeric value.
    pub fn value(self) -> f64 {
        match self {
            PiMode::Exact => std::f64::consts::PI,
            PiMode::Legacy => LEGACY_PI,
        }
    }
}

/// How the counting register is read after the inverse QFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Readout {
    /// Probability of full-register basis state `|i⟩` for `i < 2^p`, i.e.
    /// counting value `i` with the marking register at zero.
    #[default]
    BasisState,
    /// Probability of counting value `i` summed over every marking value.
    Marginal,
    /// Most frequent counting value over `shots` seeded draws from the
    /// marginal distribution.
    Sampled {
        /// Number of simulated measurements.
        shots: u32,
        /// RNG seed.
        seed: u64,
    },
}

/// Settings for one quantum count estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingConfig {
    /// Width `p` of the counting (phase) register.
    pub counting_qubits: usize,
    /// Readout strategy.
    pub readout: Readout,
    /// Value of π.
    pub pi: PiMode,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            counting_qubits: 6,
            readout: Readout::default(),
            pi: PiMode::default(),
        }
    }
}

impl CountingConfig {
    /// Set the counting register width.
    pub fn with_counting_qubits(mut self, counting_qubits: usize) -> Self {
        self.counting_qubits = counting_qubits;
        self
    }

    /// Set the readout strategy.
    pub fn with_readout(mut self, readout: Readout) -> Self {
        self.readout = readout;
        self
    }

    /// Set the π mode.
    pub fn with_pi(mut self, pi: PiMode) -> Self {
        self.pi = pi;
        self
    }

    /// `P = 2^p`.
    pub fn phase_space(&self) -> usize {
        1 << self.counting_qubits
    }

    /// Reject configurations the pipeline cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.counting_qubits == 0 {
            return Err(CoreError::InvalidConfig(
                "counting register needs at least one qubit".into(),
            ));
        }
        if self.counting_qubits >= usize::BITS as usize {
            return Err(CoreError::InvalidConfig(format!(
                "{} counting qubits overflow the phase index",
                self.counting_qubits
            )));
        }
        if let Readout::Sampled { shots: 0, .. } = self.readout {
            return Err(CoreError::InvalidConfig(
                "sampled readout needs at least one shot".into(),
            ));
        }
        Ok(())
    }
}
