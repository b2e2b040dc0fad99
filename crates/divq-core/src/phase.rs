//! Phase extraction: inverse QFT on the counting register and readout.

use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use divq_hal::{QubitId, Register};

use crate::amplify::RegisterLayout;
use crate::config::Readout;
use crate::error::{CoreError, CoreResult};

/// Inverse QFT restricted to the counting qubits.
///
/// For each qubit `i`, controlled phases `−2π / 2^(i−j+1)` from every lower
/// qubit `j`, then a Hadamard on `i`.
pub fn inverse_qft(reg: &mut dyn Register, layout: &RegisterLayout, pi: f64) -> CoreResult<()> {
    for i in 0..layout.counting {
        for j in 0..i {
            let angle = -2.0 * pi / 2f64.powi((i - j + 1) as i32);
            reg.controlled_phase_shift(QubitId(j as u32), QubitId(i as u32), angle)?;
        }
        reg.hadamard(QubitId(i as u32))?;
    }
    Ok(())
}

/// Probability of each counting value `0..2^p` under `readout`.
///
/// `Sampled` uses the marginal distribution.
pub fn counting_distribution(
    reg: &dyn Register,
    layout: &RegisterLayout,
    readout: Readout,
) -> CoreResult<Vec<f64>> {
    let phase_space = 1usize << layout.counting;
    match readout {
        Readout::BasisState => (0..phase_space)
            .map(|i| reg.probability(i).map_err(CoreError::from))
            .collect(),
        Readout::Marginal | Readout::Sampled { .. } => {
            let mut dist = vec![0.0; phase_space];
            for m in 0..1usize << layout.marking {
                for (i, p) in dist.iter_mut().enumerate() {
                    *p += reg.probability(i | (m << layout.counting))?;
                }
            }
            Ok(dist)
        }
    }
}

/// Index of the first maximum; 0 when nothing is positive.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    let mut max = 0.0;
    for (i, &v) in values.iter().enumerate() {
        if v > max {
            max = v;
            best = i;
        }
    }
    best
}

/// Most frequent value over `shots` draws from `dist`, seeded by `seed`.
pub fn sample_mode(dist: &[f64], shots: u32, seed: u64) -> CoreResult<usize> {
    let weights = WeightedIndex::new(dist)
        .map_err(|e| CoreError::InvalidConfig(format!("cannot sample readout: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut hits = vec![0u32; dist.len()];
    for _ in 0..shots {
        hits[weights.sample(&mut rng)] += 1;
    }
    trace!("Sampled counting histogram: {:?}", hits);

    let hits: Vec<f64> = hits.into_iter().map(f64::from).collect();
    Ok(argmax(&hits))
}

/// Measured counting value `p_val` before folding.
pub fn measure_phase(
    reg: &dyn Register,
    layout: &RegisterLayout,
    readout: Readout,
) -> CoreResult<usize> {
    let dist = counting_distribution(reg, layout, readout)?;
    let p_val = match readout {
        Readout::Sampled { shots, seed } => sample_mode(&dist, shots, seed)?,
        Readout::BasisState | Readout::Marginal => argmax(&dist),
    };
    debug!("Measured counting value {} ({:?})", p_val, readout);
    Ok(p_val)
}

/// Map `p_val` into `[0, P/2]`; the phase is only known up to reflection.
pub fn fold_phase(p_val: usize, phase_space: usize) -> usize {
    if p_val > phase_space / 2 {
        phase_space - p_val
    } else {
        p_val
    }
}

/// Quantum-counting estimate `N · sin²(p_val · π / P)`.
pub fn count_from_phase(p_val: usize, phase_space: usize, dimension: usize, pi: f64) -> f64 {
    let theta = p_val as f64 * pi / phase_space as f64;
    dimension as f64 * theta.sin().powi(2)
}
