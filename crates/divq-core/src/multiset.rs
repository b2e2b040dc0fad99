//! The multiset under analysis.

use std::fmt;

use crate::bits::bit_product;
use crate::error::{CoreError, CoreResult};

/// Widest marking register accepted.
///
/// The oracle is a dense `2^n × 2^n` matrix, which is 16 MB at this width.
pub const MAX_WIDTH: usize = 10;

/// An ordered multiset of `width`-bit vectors.
///
/// Element `i` is addressed by marking-register basis state `|i⟩`, so the
/// cardinality is bounded by `2^width`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset {
    elements: Vec<u64>,
    width: usize,
}

impl Multiset {
    /// Validate and wrap `elements` for a `width`-qubit marking register.
    pub fn new(elements: Vec<u64>, width: usize) -> CoreResult<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(CoreError::InvalidWidth {
                width,
                max: MAX_WIDTH,
            });
        }

        let capacity = 1usize << width;
        if elements.len() > capacity {
            return Err(CoreError::TooManyElements {
                len: elements.len(),
                width,
                capacity,
            });
        }

        if let Some((index, &value)) = elements
            .iter()
            .enumerate()
            .find(|&(_, &v)| v >> width != 0)
        {
            return Err(CoreError::ElementTooWide {
                index,
                value,
                width,
            });
        }

        Ok(Self { elements, width })
    }

    /// `{1, 1, 1, 3, 3, 5}` over 3 bits.
    pub fn example() -> Self {
        Self {
            elements: vec![0x1, 0x1, 0x1, 0x3, 0x3, 0x5],
            width: 3,
        }
    }

    /// The elements in order.
    pub fn elements(&self) -> &[u64] {
        &self.elements
    }

    /// Cardinality.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the multiset has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bit width `n` of every element, and of the marking register.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `N = 2^n`, the size of the marking register's state space.
    pub fn dimension(&self) -> usize {
        1 << self.width
    }

    /// Exact number of elements `x` with `π_u(x) = 1`.
    pub fn exact_count(&self, u: u64) -> usize {
        self.elements
            .iter()
            .filter(|&&x| bit_product(x, u) == 1)
            .count()
    }
}

impl fmt::Display for Multiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:#x}")?;
        }
        write!(f, "}} over {} bits", self.width)
    }
}
