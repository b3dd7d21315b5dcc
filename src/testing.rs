use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers in [0, 1) using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate a table of `n` irregularly spaced, increasing sample locations
/// on roughly `[start, stop]`, with `stride` random values per sample
pub fn random_table(
    rng: &mut StdRng,
    n: usize,
    stride: usize,
    start: f64,
    stop: f64,
) -> (Vec<f64>, Vec<f64>) {
    // Jitter an even grid by less than half a cell so the order is kept
    let dx = (stop - start) / (n - 1) as f64;
    let xs = randn::<f64>(rng, n)
        .iter()
        .enumerate()
        .map(|(i, r)| start + dx * (i as f64 + 0.4 * (r - 0.5)))
        .collect();
    let ys = randn::<f64>(rng, n * stride);
    (xs, ys)
}
