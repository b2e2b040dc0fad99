//! Division-property search loop.

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;
use tracing::{info, instrument};

use divq_hal::Backend;

use crate::bits::WeightIter;
use crate::config::CountingConfig;
use crate::counting::{QuantumCounter, rounds_odd};
use crate::error::CoreResult;
use crate::multiset::Multiset;

/// One evaluated control parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    /// Hamming weight being searched when `u` was tried.
    pub weight: usize,
    /// Control parameter.
    pub u: u64,
    /// Estimated (or exact) number of elements with `π_u(x) = 1`.
    pub count: f64,
}

impl Candidate {
    /// Whether the rounded count is odd.
    pub fn is_odd(&self) -> bool {
        rounds_odd(self.count)
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionProperty {
    /// Division-property exponent.
    pub k: usize,
    /// Witness control parameter; 0 when every weight was exhausted.
    pub u: u64,
    /// `k` was forced from 1 to 0 because the multiset has odd cardinality.
    pub corrected: bool,
    /// Every candidate evaluated, in order.
    pub trace: Vec<Candidate>,
}

impl fmt::Display for DivisionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Division Property holds for k = {} when u = {:02X}",
            self.k, self.u
        )
    }
}

/// Walk weights `1..=n` and, within each weight, control parameters in
/// ascending order until `count` returns an odd value.
///
/// Exhausting a weight resets `u` to 0 before moving on. After the loop, an
/// odd-cardinality multiset turns `k = 1` into `k = 0` while keeping the
/// witness.
pub fn search_with<F, E>(multiset: &Multiset, mut count: F) -> Result<DivisionProperty, E>
where
    F: FnMut(u64) -> Result<f64, E>,
{
    let width = multiset.width();
    let bound = multiset.dimension() as u64;

    let mut k = 0;
    let mut u = 0;
    let mut trace = Vec::new();

    'weights: for weight in 1..=width {
        k = weight;
        for candidate in WeightIter::new(bound, weight as u32) {
            let entry = Candidate {
                weight,
                u: candidate,
                count: count(candidate)?,
            };
            trace.push(entry);
            if entry.is_odd() {
                u = candidate;
                break 'weights;
            }
        }
        u = 0;
    }

    let corrected = k == 1 && multiset.len() % 2 == 1;
    if corrected {
        k = 0;
    }

    Ok(DivisionProperty {
        k,
        u,
        corrected,
        trace,
    })
}

/// Same search with exact classical counts; the reference for the quantum run.
pub fn classical_search(multiset: &Multiset) -> DivisionProperty {
    let Ok(property) =
        search_with(multiset, |u| Ok::<_, Infallible>(multiset.exact_count(u) as f64));
    property
}

/// Division-property search driven by quantum counting.
pub struct DivisionSearch<'a> {
    counter: QuantumCounter<'a>,
}

impl<'a> DivisionSearch<'a> {
    /// Prepare a search over `multiset` on `backend`.
    pub fn new(
        backend: &'a dyn Backend,
        multiset: &'a Multiset,
        config: CountingConfig,
    ) -> CoreResult<Self> {
        Ok(Self {
            counter: QuantumCounter::new(backend, multiset, config)?,
        })
    }

    /// Run the search to completion.
    #[instrument(skip(self), fields(multiset = %self.counter.multiset()))]
    pub fn run(&self) -> CoreResult<DivisionProperty> {
        let multiset = self.counter.multiset();
        let result = search_with(multiset, |u| self.counter.estimate(u).map(|e| e.count))?;
        info!(
            "k = {}, u = {:#04x} after {} candidates{}",
            result.k,
            result.u,
            result.trace.len(),
            if result.corrected {
                " (odd-cardinality correction)"
            } else {
                ""
            }
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_classical_example() {
        let result = classical_search(&Multiset::example());
        assert_eq!((result.k, result.u), (1, 0x04));
        assert!(!result.corrected);
        let tried: Vec<_> = result.trace.iter().map(|c| c.u).collect();
        assert_eq!(tried, vec![1, 2, 4]);
    }

    #[test]
    fn test_exhausted_weights_leave_k_at_width() {
        let x = Multiset::new(vec![7, 7], 3).unwrap();
        let result = classical_search(&x);
        assert_eq!((result.k, result.u), (3, 0));
        assert_eq!(result.trace.len(), 7);
    }

    #[test]
    fn test_odd_cardinality_correction() {
        let x = Multiset::new(vec![1, 2, 4], 3).unwrap();
        let result = classical_search(&x);
        assert_eq!((result.k, result.u), (0, 1));
        assert!(result.corrected);
    }

    #[test]
    fn test_correction_only_applies_to_k_one() {
        // Odd cardinality, but the first odd count is at weight 2.
        let x = Multiset::new(vec![3, 1, 2], 2).unwrap();
        let result = classical_search(&x);
        assert_eq!((result.k, result.u), (2, 3));
        assert!(!result.corrected);
    }

    #[test]
    fn test_top_weight_reachable() {
        let x = Multiset::new((0..8).collect(), 3).unwrap();
        let result = classical_search(&x);
        assert_eq!((result.k, result.u), (3, 7));
    }

    #[test]
    fn test_counter_errors_propagate() {
        let x = Multiset::example();
        let result = search_with(&x, |_| Err(CoreError::InvalidConfig("boom".into())));
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_display_matches_report_line() {
        let result = classical_search(&Multiset::example());
        assert_eq!(
            result.to_string(),
            "Division Property holds for k = 1 when u = 04"
        );
    }
}
