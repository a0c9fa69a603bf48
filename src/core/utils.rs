use rand::{
    seq::SliceRandom,
    Rng,
};

use super::errors::{
    RagozoError,
    Result,
};

/// Uniform choice over `items`. `what` names the collection in the error.
pub fn pick_random<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    what: &'static str,
    rng: &mut R,
) -> Result<&'a T> {
    if items.is_empty() {
        return Err(RagozoError::EmptyCollection(what));
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// Returns a shuffled copy, leaving `items` untouched.
///
/// `SliceRandom::shuffle` is a Fisher-Yates walk from the last index down,
/// swapping each slot with a uniform index in `[0, i]`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut result = items.to_vec();
    result.shuffle(rng);
    result
}
