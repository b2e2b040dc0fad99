//! Register trait: the gate primitives a backend must provide.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{HalError, HalResult};
use crate::qubit::QubitId;

/// A backend-owned quantum register.
///
/// Qubit 0 is the least significant bit of a basis-state index. The register
/// is released when dropped.
pub trait Register: Send {
    /// Number of qubits in this register.
    fn num_qubits(&self) -> usize;

    /// Reset to the all-zero basis state.
    fn init_zero_state(&mut self) -> HalResult<()>;

    /// Hadamard on `qubit`.
    fn hadamard(&mut self, qubit: QubitId) -> HalResult<()>;

    /// Pauli-X on `qubit`.
    fn pauli_x(&mut self, qubit: QubitId) -> HalResult<()>;

    /// Multiply by `e^{i·angle}` every basis state where both qubits are set.
    fn controlled_phase_shift(
        &mut self,
        control: QubitId,
        target: QubitId,
        angle: f64,
    ) -> HalResult<()>;

    /// Apply a dense unitary to `targets` on the subspace where all `controls`
    /// are set.
    ///
    /// `matrix` is `2^t × 2^t` for `t = targets.len()`, and `targets[0]` is
    /// the least significant bit of the matrix index.
    fn multi_controlled_unitary(
        &mut self,
        controls: &[QubitId],
        targets: &[QubitId],
        matrix: &Array2<Complex64>,
    ) -> HalResult<()>;

    /// Negate every basis state in which all `qubits` are set.
    fn multi_controlled_phase_flip(&mut self, qubits: &[QubitId]) -> HalResult<()>;

    /// Probability `|amplitude|²` of the full-register basis state `index`.
    fn probability(&self, index: usize) -> HalResult<f64>;
}

/// Check that every qubit in `groups` lies inside the register and that no
/// qubit appears twice across all groups.
pub fn validate_qubits(num_qubits: usize, groups: &[&[QubitId]]) -> HalResult<()> {
    let mut seen = 0usize;
    for qubit in groups.iter().flat_map(|g| g.iter().copied()) {
        if qubit.index() >= num_qubits {
            return Err(HalError::QubitOutOfRange { qubit, num_qubits });
        }
        if seen & qubit.mask() != 0 {
            return Err(HalError::DuplicateQubit(qubit));
        }
        seen |= qubit.mask();
    }
    Ok(())
}

/// Check that `matrix` is square with side `2^num_targets`.
pub fn validate_matrix(num_targets: usize, matrix: &Array2<Complex64>) -> HalResult<()> {
    let expected = 1usize << num_targets;
    let (rows, cols) = matrix.dim();
    if rows != expected || cols != expected {
        return Err(HalError::MatrixDimension {
            expected,
            rows,
            cols,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_qubits_ok() {
        let controls = [QubitId(0)];
        let targets = [QubitId(1), QubitId(2)];
        assert!(validate_qubits(3, &[&controls[..], &targets[..]]).is_ok());
    }

    #[test]
    fn test_validate_qubits_out_of_range() {
        let qubits = [QubitId(3)];
        let err = validate_qubits(3, &[&qubits[..]]).unwrap_err();
        assert!(matches!(
            err,
            HalError::QubitOutOfRange {
                qubit: QubitId(3),
                num_qubits: 3
            }
        ));
    }

    #[test]
    fn test_validate_qubits_collision() {
        let controls = [QubitId(1)];
        let targets = [QubitId(0), QubitId(1)];
        let err = validate_qubits(4, &[&controls[..], &targets[..]]).unwrap_err();
        assert!(matches!(err, HalError::DuplicateQubit(QubitId(1))));
    }

    #[test]
    fn test_validate_matrix() {
        let identity = Array2::<Complex64>::eye(4);
        assert!(validate_matrix(2, &identity).is_ok());

        let err = validate_matrix(3, &identity).unwrap_err();
        assert!(matches!(
            err,
            HalError::MatrixDimension {
                expected: 8,
                rows: 4,
                cols: 4
            }
        ));
    }
}
