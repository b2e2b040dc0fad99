//! Statevector simulation engine.

use ndarray::Array2;
use num_complex::Complex64;

/// A statevector representing a quantum state.
///
/// Indices are unchecked here; [`crate::simulator::SimRegister`] validates
/// qubits before anything reaches this type.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Size of the state space.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Return to |0...0⟩ without reallocating.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Probability of a basis state.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    pub fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.dim() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    pub fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.dim() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    // =========================================================================
    // Controlled gates
    // =========================================================================

    pub fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let mask = (1 << control) | (1 << target);
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..self.dim() {
            if i & mask == mask {
                self.amplitudes[i] *= phase;
            }
        }
    }

    /// Negate every amplitude whose index has all bits of `mask` set.
    pub fn apply_phase_flip(&mut self, mask: usize) {
        for i in 0..self.dim() {
            if i & mask == mask {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    /// Apply `matrix` to `targets` wherever all bits of `ctrl_mask` are set.
    ///
    /// Bit `b` of a matrix row/column index maps to qubit `targets[b]`.
    pub fn apply_controlled_matrix(
        &mut self,
        ctrl_mask: usize,
        targets: &[usize],
        matrix: &Array2<Complex64>,
    ) {
        let dim = 1usize << targets.len();
        let tgt_mask: usize = targets.iter().map(|&t| 1usize << t).sum();

        // Offset of each matrix index inside the full state space.
        let offsets: Vec<usize> = (0..dim)
            .map(|k| {
                targets
                    .iter()
                    .enumerate()
                    .filter(|&(bit, _)| k & (1 << bit) != 0)
                    .map(|(_, &t)| 1usize << t)
                    .sum()
            })
            .collect();

        let mut block = vec![Complex64::new(0.0, 0.0); dim];
        for base in 0..self.dim() {
            if base & tgt_mask != 0 || base & ctrl_mask != ctrl_mask {
                continue;
            }
            for (slot, &off) in block.iter_mut().zip(&offsets) {
                *slot = self.amplitudes[base | off];
            }
            for (row, &off) in offsets.iter().enumerate() {
                self.amplitudes[base | off] = block
                    .iter()
                    .enumerate()
                    .map(|(col, amp)| matrix[[row, col]] * amp)
                    .sum();
            }
        }
    }
}
