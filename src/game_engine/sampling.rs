use rand::Rng;

use crate::game_engine::error::{Error, Result};

/// In-place Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Draw `n` distinct elements from `pool` without replacement.
///
/// Fails instead of returning a short sample when the pool is too small.
pub fn sample<T: Copy, R: Rng>(pool: &[T], n: usize, rng: &mut R) -> Result<Vec<T>> {
    if n > pool.len() {
        return Err(Error::DistractorPoolExhausted { needed: n, available: pool.len() });
    }
    let mut drawn = pool.to_vec();
    shuffle(&mut drawn, rng);
    drawn.truncate(n);
    Ok(drawn)
}
