//! Marking oracle construction.

use ndarray::Array2;
use num_complex::Complex64;

use crate::bits::bit_product;
use crate::error::{CoreError, CoreResult};
use crate::multiset::Multiset;

/// Diagonal ±1 operator that flips the sign of every multiset index `i`
/// whose element satisfies `π_u(X[i]) = 1`.
///
/// Indices past the end of the multiset are padding and keep sign +1, so the
/// number of marked basis states equals the number of compatible elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkingOracle {
    signs: Vec<i8>,
}

impl MarkingOracle {
    /// Build the oracle for control parameter `u`.
    pub fn build(multiset: &Multiset, u: u64) -> CoreResult<Self> {
        let width = multiset.width();
        if u >> width != 0 {
            return Err(CoreError::ControlOutOfRange { u, width });
        }

        let signs = (0..multiset.dimension())
            .map(|i| match multiset.elements().get(i) {
                Some(&x) if bit_product(x, u) == 1 => -1,
                _ => 1,
            })
            .collect();

        Ok(Self { signs })
    }

    /// Diagonal entries, one per marking basis state.
    pub fn signs(&self) -> &[i8] {
        &self.signs
    }

    /// Number of basis states with sign −1.
    pub fn marked(&self) -> usize {
        self.signs.iter().filter(|&&s| s < 0).count()
    }

    /// Dense `2^n × 2^n` form handed to the backend.
    pub fn matrix(&self) -> Array2<Complex64> {
        let diagonal = self
            .signs
            .iter()
            .map(|&s| Complex64::new(f64::from(s), 0.0))
            .collect::<ndarray::Array1<_>>();
        Array2::from_diag(&diagonal)
    }
}
