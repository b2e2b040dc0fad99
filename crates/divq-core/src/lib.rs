//! `divq-core`: division-property search by quantum counting.
//!
//! For a multiset `X` of `n`-bit vectors, the division property holds at the
//! smallest Hamming weight `k` for which some mask `u` of weight `k` makes
//! `Σ_{x∈X} π_u(x)` odd. Instead of enumerating `X`, each sum is estimated by
//! quantum counting:
//!
//! 1. [`oracle`] turns `(X, u)` into a diagonal ±1 marking unitary.
//! 2. [`amplify`] runs controlled Grover iterations over a `p`-qubit counting
//!    register, doubling the iteration count per level.
//! 3. [`phase`] applies the inverse QFT, reads the dominant counting value and
//!    converts it to `N · sin²(p_val · π / P)`.
//! 4. [`search`] walks weights `1..=n` and stops at the first odd count.
//!
//! Gates are applied by any [`divq_hal::Backend`].
//!
//! # Quick start
//!
//! ```rust
//! use divq_adapter_sim::SimulatorBackend;
//! use divq_core::{CountingConfig, DivisionSearch, Multiset};
//!
//! let backend = SimulatorBackend::new();
//! let multiset = Multiset::example(); // {1, 1, 1, 3, 3, 5}
//! let search = DivisionSearch::new(&backend, &multiset, CountingConfig::default()).unwrap();
//! let result = search.run().unwrap();
//! assert_eq!((result.k, result.u), (1, 0x04));
//! println!("{result}");
//! ```

pub mod amplify;
pub mod bits;
pub mod config;
pub mod counting;
pub mod error;
pub mod multiset;
pub mod oracle;
pub mod phase;
pub mod search;

pub use amplify::RegisterLayout;
pub use config::{CountingConfig, LEGACY_PI, PiMode, Readout};
pub use counting::{CountEstimate, QuantumCounter};
pub use error::{CoreError, CoreResult};
pub use multiset::{MAX_WIDTH, Multiset};
pub use oracle::MarkingOracle;
pub use search::{Candidate, DivisionProperty, DivisionSearch, classical_search, search_with};
