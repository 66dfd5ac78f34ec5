use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

/// Uniformly shuffled copy of `items`; the input is left untouched.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rng())
}

/// Same as [`shuffle`] but driven by the caller's RNG.
#[must_use]
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut out = items.to_vec();
    // Fisher-Yates; every permutation is equally likely.
    out.as_mut_slice().shuffle(rng);
    out
}
