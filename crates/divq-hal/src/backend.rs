//! Backend trait and configuration.
//!
//! A [`Backend`] hands out [`Register`]s. Everything the counting pipeline
//! needs from a backend is:
//!
//! ```text
//!   create_register() ──→ gate primitives ──→ probability() ──→ drop
//!    (zero state)          (H, X, CP, MCU,      (readout)       (release)
//!                           phase flip)
//! ```
//!
//! Registers are never shared: each estimation creates one, drives it to
//! completion and drops it.

use serde::{Deserialize, Serialize};

use crate::error::HalResult;
use crate::register::Register;

/// Configuration for a backend instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional backend-specific settings.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Trait for quantum backends.
///
/// # Contract
///
/// - `create_register()` MUST return a register of exactly `num_qubits`
///   qubits in the all-zero basis state, or `RegisterTooLarge` when the
///   width exceeds [`Backend::max_qubits`].
/// - Registers are independent: gates on one never affect another.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Largest register this backend can allocate.
    fn max_qubits(&self) -> usize;

    /// Allocate a register in the |0...0⟩ state.
    fn create_register(&self, num_qubits: usize) -> HalResult<Box<dyn Register>>;
}

/// Factory trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a new backend instance from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}
