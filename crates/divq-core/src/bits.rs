//! Bit-vector helpers.

/// `π_u(x)`: 1 iff every bit set in `u` is also set in `x`.
///
/// ```
/// use divq_core::bits::bit_product;
///
/// assert_eq!(bit_product(0b101, 0b100), 1);
/// assert_eq!(bit_product(0b101, 0b010), 0);
/// assert_eq!(bit_product(0b101, 0), 1);
/// ```
pub fn bit_product(x: u64, u: u64) -> u8 {
    u8::from(x & u == u)
}

/// Number of set bits.
pub fn hamming_weight(x: u64) -> u32 {
    x.count_ones()
}

/// Smallest `v` with `x < v < bound` and `hamming_weight(v) == weight`.
pub fn next_with_weight(bound: u64, x: u64, weight: u32) -> Option<u64> {
    let start = x.checked_add(1)?;
    (start..bound).find(|&v| hamming_weight(v) == weight)
}

/// Ascending iterator over the values below `bound` with a fixed Hamming
/// weight.
///
/// The walk starts strictly after 0, so weight 0 yields nothing.
#[derive(Debug, Clone)]
pub struct WeightIter {
    bound: u64,
    weight: u32,
    cursor: Option<u64>,
}

impl WeightIter {
    /// Iterate the weight-`weight` values in `(0, bound)`.
    pub fn new(bound: u64, weight: u32) -> Self {
        Self {
            bound,
            weight,
            cursor: Some(0),
        }
    }
}

impl Iterator for WeightIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let next = next_with_weight(self.bound, self.cursor?, self.weight);
        self.cursor = next;
        next
    }
}
