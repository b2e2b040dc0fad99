//! Controlled amplitude amplification over the counting register.
//!
//! Counting qubit `j` controls `2^j` oracle applications. Levels are walked
//! from the most significant counting qubit down, so the per-level iteration
//! count starts at 1 and doubles:
//!
//! ```text
//!   level p-1 : 1 × (controlled oracle, diffusion)
//!   level p-2 : 2 × ...
//!   level 0   : 2^(p-1) × ...
//! ```
//!
//! Only the oracle is controlled; the diffusion acts on the marking register
//! unconditionally.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use divq_hal::{QubitId, Register, qubit_range};

use crate::error::CoreResult;

/// Qubit assignment of the joint register.
///
/// Counting qubits occupy `0..p` and marking qubits `p..p+n`, so a basis
/// index below `2^p` has the marking register at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterLayout {
    /// Width `p` of the counting register.
    pub counting: usize,
    /// Width `n` of the marking register.
    pub marking: usize,
}

impl RegisterLayout {
    /// Layout for `counting` phase qubits and `marking` index qubits.
    pub fn new(counting: usize, marking: usize) -> Self {
        Self { counting, marking }
    }

    /// `p + n`.
    pub fn total(&self) -> usize {
        self.counting + self.marking
    }

    /// Counting qubits, least significant first.
    pub fn counting_qubits(&self) -> Vec<QubitId> {
        qubit_range(0, self.counting as u32)
    }

    /// Marking qubits, least significant first.
    pub fn marking_qubits(&self) -> Vec<QubitId> {
        qubit_range(self.counting as u32, self.marking as u32)
    }
}

/// Per-level schedule: each counting qubit with its number of Grover
/// iterations, most significant first.
pub fn iteration_schedule(counting: usize) -> Vec<(QubitId, usize)> {
    (0..counting)
        .rev()
        .zip(std::iter::successors(Some(1usize), |it| it.checked_mul(2)))
        .map(|(gi, iterations)| (QubitId(gi as u32), iterations))
        .collect()
}

/// Hadamard on every qubit of a freshly zeroed register.
pub fn prepare_superposition(reg: &mut dyn Register, layout: &RegisterLayout) -> CoreResult<()> {
    for q in 0..layout.total() {
        reg.hadamard(QubitId(q as u32))?;
    }
    Ok(())
}

/// Reflection about the uniform superposition of the marking register.
pub fn diffuse(reg: &mut dyn Register, marking: &[QubitId]) -> CoreResult<()> {
    for &q in marking {
        reg.hadamard(q)?;
    }
    for &q in marking {
        reg.pauli_x(q)?;
    }
    reg.multi_controlled_phase_flip(marking)?;
    for &q in marking {
        reg.pauli_x(q)?;
    }
    for &q in marking {
        reg.hadamard(q)?;
    }
    Ok(())
}

/// Run the controlled Grover loop with `oracle` as the marking unitary.
pub fn amplify(
    reg: &mut dyn Register,
    layout: &RegisterLayout,
    oracle: &Array2<Complex64>,
) -> CoreResult<()> {
    let marking = layout.marking_qubits();

    for (control, iterations) in iteration_schedule(layout.counting) {
        debug!("Level {}: {} Grover iterations", control, iterations);
        for _ in 0..iterations {
            reg.multi_controlled_unitary(&[control], &marking, oracle)?;
            diffuse(reg, &marking)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use divq_hal::HalResult;

    /// Gate call captured by [`RecordingRegister`].
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        H(u32),
        X(u32),
        Cp(u32, u32, f64),
        Mcu(Vec<u32>, Vec<u32>),
        Flip(Vec<u32>),
    }

    /// Register stub that only records the primitive calls made on it.
    #[derive(Default)]
    pub(crate) struct RecordingRegister {
        pub(crate) ops: Vec<Op>,
        pub(crate) width: usize,
    }

    fn ids(qubits: &[QubitId]) -> Vec<u32> {
        qubits.iter().map(|q| q.0).collect()
    }

    impl Register for RecordingRegister {
        fn num_qubits(&self) -> usize {
            self.width
        }

        fn init_zero_state(&mut self) -> HalResult<()> {
            Ok(())
        }

        fn hadamard(&mut self, qubit: QubitId) -> HalResult<()> {
            self.ops.push(Op::H(qubit.0));
            Ok(())
        }

        fn pauli_x(&mut self, qubit: QubitId) -> HalResult<()> {
            self.ops.push(Op::X(qubit.0));
            Ok(())
        }

        fn controlled_phase_shift(
            &mut self,
            control: QubitId,
            target: QubitId,
            angle: f64,
        ) -> HalResult<()> {
            self.ops.push(Op::Cp(control.0, target.0, angle));
            Ok(())
        }

        fn multi_controlled_unitary(
            &mut self,
            controls: &[QubitId],
            targets: &[QubitId],
            _matrix: &Array2<Complex64>,
        ) -> HalResult<()> {
            self.ops.push(Op::Mcu(ids(controls), ids(targets)));
            Ok(())
        }

        fn multi_controlled_phase_flip(&mut self, qubits: &[QubitId]) -> HalResult<()> {
            self.ops.push(Op::Flip(ids(qubits)));
            Ok(())
        }

        fn probability(&self, _index: usize) -> HalResult<f64> {
            Ok(0.0)
        }
    }

    #[test]
    fn test_layout() {
        let layout = RegisterLayout::new(6, 3);
        assert_eq!(layout.total(), 9);
        assert_eq!(layout.counting_qubits().len(), 6);
        assert_eq!(
            layout.marking_qubits(),
            vec![QubitId(6), QubitId(7), QubitId(8)]
        );
    }

    #[test]
    fn test_schedule_doubles_from_top_level() {
        let schedule = iteration_schedule(6);
        let expected: Vec<_> = [(5, 1), (4, 2), (3, 4), (2, 8), (1, 16), (0, 32)]
            .into_iter()
            .map(|(q, it)| (QubitId(q), it))
            .collect();
        assert_eq!(schedule, expected);
        assert!(iteration_schedule(0).is_empty());
    }

    #[test]
    fn test_diffusion_sequence() {
        let mut reg = RecordingRegister::default();
        diffuse(&mut reg, &[QubitId(2), QubitId(3)]).unwrap();
        assert_eq!(
            reg.ops,
            vec![
                Op::H(2),
                Op::H(3),
                Op::X(2),
                Op::X(3),
                Op::Flip(vec![2, 3]),
                Op::X(2),
                Op::X(3),
                Op::H(2),
                Op::H(3),
            ]
        );
    }

    #[test]
    fn test_amplify_controls_each_level() {
        let layout = RegisterLayout::new(3, 2);
        let mut reg = RecordingRegister {
            width: layout.total(),
            ..Default::default()
        };
        amplify(&mut reg, &layout, &Array2::eye(4)).unwrap();

        let controls: Vec<_> = reg
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Mcu(c, t) => {
                    assert_eq!(t, &vec![3, 4]);
                    Some(c[0])
                }
                _ => None,
            })
            .collect();
        assert_eq!(controls, vec![2, 1, 1, 0, 0, 0, 0]);

        // One uncontrolled diffusion per oracle call.
        let flips = reg.ops.iter().filter(|op| matches!(op, Op::Flip(_))).count();
        assert_eq!(flips, 7);
    }

    #[test]
    fn test_prepare_superposition_touches_every_qubit() {
        let layout = RegisterLayout::new(2, 2);
        let mut reg = RecordingRegister::default();
        prepare_superposition(&mut reg, &layout).unwrap();
        assert_eq!(reg.ops, vec![Op::H(0), Op::H(1), Op::H(2), Op::H(3)]);
    }
}
