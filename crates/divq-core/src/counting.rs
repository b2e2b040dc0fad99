//! One quantum count estimate per control parameter.

use serde::Serialize;
use tracing::{debug, info, instrument};

use divq_hal::Backend;

use crate::amplify::{RegisterLayout, amplify, prepare_superposition};
use crate::config::CountingConfig;
use crate::error::CoreResult;
use crate::multiset::Multiset;
use crate::oracle::MarkingOracle;
use crate::phase::{count_from_phase, fold_phase, inverse_qft, measure_phase};

/// Whether `count`, rounded to the nearest integer, is odd.
pub fn rounds_odd(count: f64) -> bool {
    (count.round() as u64) % 2 == 1
}

/// Result of one quantum counting run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountEstimate {
    /// Control parameter the oracle marked for.
    pub u: u64,
    /// Folded counting value `p_val`.
    pub phase: usize,
    /// `N · sin²(p_val · π / P)`.
    pub count: f64,
}

impl CountEstimate {
    /// Estimate rounded to the nearest integer.
    pub fn rounded(&self) -> u64 {
        self.count.round() as u64
    }

    /// Whether the rounded count is odd.
    pub fn is_odd(&self) -> bool {
        rounds_odd(self.count)
    }
}

/// Quantum counter bound to one backend and one multiset.
///
/// Holds no state between calls: each [`QuantumCounter::estimate`] creates
/// its own register and drops it before returning.
pub struct QuantumCounter<'a> {
    backend: &'a dyn Backend,
    multiset: &'a Multiset,
    config: CountingConfig,
    layout: RegisterLayout,
}

impl<'a> QuantumCounter<'a> {
    /// Create a counter; fails on an invalid configuration.
    pub fn new(
        backend: &'a dyn Backend,
        multiset: &'a Multiset,
        config: CountingConfig,
    ) -> CoreResult<Self> {
        config.validate()?;
        let layout = RegisterLayout::new(config.counting_qubits, multiset.width());
        Ok(Self {
            backend,
            multiset,
            config,
            layout,
        })
    }

    /// The multiset being counted over.
    pub fn multiset(&self) -> &Multiset {
        self.multiset
    }

    /// Estimate how many elements `x` satisfy `π_u(x) = 1`.
    #[instrument(skip(self), fields(backend = self.backend.name()))]
    pub fn estimate(&self, u: u64) -> CoreResult<CountEstimate> {
        let oracle = MarkingOracle::build(self.multiset, u)?;
        let matrix = oracle.matrix();
        let pi = self.config.pi.value();

        let mut reg = self.backend.create_register(self.layout.total())?;
        reg.init_zero_state()?;
        debug!(
            "Counting with {} phase qubits over {} marking qubits",
            self.layout.counting, self.layout.marking
        );

        prepare_superposition(&mut *reg, &self.layout)?;
        amplify(&mut *reg, &self.layout, &matrix)?;
        inverse_qft(&mut *reg, &self.layout, pi)?;
        let measured = measure_phase(&*reg, &self.layout, self.config.readout)?;
        drop(reg);

        let phase_space = self.config.phase_space();
        let phase = fold_phase(measured, phase_space);
        let count = count_from_phase(phase, phase_space, self.multiset.dimension(), pi);
        info!("u = {:#04x}: p_val = {}, count ≈ {:.4}", u, phase, count);

        Ok(CountEstimate { u, phase, count })
    }
}
