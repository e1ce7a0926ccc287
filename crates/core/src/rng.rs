//! RNG module - seeded Mulberry32 generator and seeded shuffling
//!
//! Every puzzle is reproducible from one integer, so the generator must give the
//! same sequence on every platform. All mixing is done with wrapping `u32`
//! arithmetic; floats only appear at the very end when a caller asks for `[0, 1)`.
//!
//! [`seeded_shuffle`] does not keep a generator alive between swaps. Each swap
//! position `m` draws from a fresh generator seeded with `seed + m`, so shuffles
//! of lists with different lengths stay independent of each other.

/// Golden-ratio style increment added to the state on every draw
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// Mulberry32 generator over a 32-bit state
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a new generator from the given seed (0 is a valid seed)
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Generate an index in `[0, len)`.
    ///
    /// Equal to `floor(next_f64() * len)` but computed in integers.
    pub fn next_index(&mut self, len: usize) -> usize {
        scale(self.next_u32(), len)
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[inline]
fn scale(raw: u32, len: usize) -> usize {
    ((raw as u64 * len as u64) >> 32) as usize
}

/// Shuffle a copy of `items` with Fisher-Yates driven by `seed`.
///
/// # Examples
///
/// ```
/// use word_search_core::seeded_shuffle;
///
/// let a = seeded_shuffle(&[1, 2, 3, 4, 5], 7);
/// let b = seeded_shuffle(&[1, 2, 3, 4, 5], 7);
/// assert_eq!(a, b);
/// ```
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, seed);
    copy
}

/// In-place variant of [`seeded_shuffle`]
pub fn shuffle_in_place<T>(slice: &mut [T], seed: u32) {
    for m in (1..=slice.len()).rev() {
        let i = SeededRandom::new(seed.wrapping_add(m as u32)).next_index(m);
        slice.swap(m - 1, i);
    }
}
