//! Random index sources used by the adjacency generator.
//!
//! Every [`rand::RngCore`] is a [`RandomSource`], so a
//! [`rand::rngs::SmallRng`] seeded with `seed_from_u64` yields reproducible
//! graphs. [`ReplaySource`] replays a scripted sequence of draws for fixtures.

use std::num::NonZeroUsize;

use rand::{Rng, RngCore};

/// Supplies uniformly distributed node indices.
pub trait RandomSource {
    /// Returns an index in `[0, bound)`.
    fn next_index(&mut self, bound: NonZeroUsize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: NonZeroUsize) -> usize {
        self.gen_range(0..bound.get())
    }
}

/// [`RandomSource`] that cycles through a fixed list of draws.
///
/// Each draw is reduced modulo the requested bound. An empty script always
/// yields `0`.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use graphgen_core::{RandomSource, ReplaySource};
///
/// let bound = NonZeroUsize::new(3).expect("non-zero");
/// let mut source = ReplaySource::new(vec![1, 5]);
/// assert_eq!(source.next_index(bound), 1);
/// assert_eq!(source.next_index(bound), 2);
/// assert_eq!(source.next_index(bound), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReplaySource {
    draws: Vec<usize>,
    cursor: usize,
}

impl ReplaySource {
    /// Creates a source replaying `draws` in order, wrapping at the end.
    #[must_use]
    pub const fn new(draws: Vec<usize>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplaySource {
    fn next_index(&mut self, bound: NonZeroUsize) -> usize {
        let slot = self.cursor.checked_rem(self.draws.len()).unwrap_or(0);
        self.cursor = self.cursor.saturating_add(1);
        self.draws
            .get(slot)
            .map_or(0, |draw| draw.checked_rem(bound.get()).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    fn bound(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("test bounds are non-zero")
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(17)]
    fn small_rng_stays_within_bound(#[case] limit: usize) {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..256 {
            assert!(rng.next_index(bound(limit)) < limit);
        }
    }

    #[test]
    fn seeded_rngs_agree() {
        let mut left = SmallRng::seed_from_u64(99);
        let mut right = SmallRng::seed_from_u64(99);
        let a: Vec<usize> = (0..32).map(|_| left.next_index(bound(10))).collect();
        let b: Vec<usize> = (0..32).map(|_| right.next_index(bound(10))).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn replay_wraps_and_reduces() {
        let mut source = ReplaySource::new(vec![4, 9, 2]);
        let draws: Vec<usize> = (0..5).map(|_| source.next_index(bound(4))).collect();
        assert_eq!(draws, vec![0, 1, 2, 0, 1]);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn empty_replay_yields_zero() {
        let mut source = ReplaySource::default();
        assert_eq!(source.next_index(bound(8)), 0);
    }
}
