//! Uniform random selection from pools.
//!
//! Both helpers take the rng explicitly so callers (and tests) decide whether
//! it is seeded.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one element uniformly at random. `None` for an empty pool.
pub fn pick_uniform<'a, T, R>(pool: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    pool.choose(rng)
}

/// Sample `count` elements without replacement, in random order.
///
/// Returns fewer than `count` elements only when the pool is smaller.
pub fn sample_distinct<T, R>(pool: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut picked: Vec<T> = pool.choose_multiple(rng, count).cloned().collect();
    picked.shuffle(rng);
    picked
}
