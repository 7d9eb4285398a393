//! Single password generation.

use rand::RngCore;
use rand::distr::{Distribution, Uniform};

use crate::error::GenerateError;

/// Draw one password of `length` characters from `pool`.
///
/// Each character is an independent uniform draw over every pool index,
/// with replacement. `pool` is expected to be ASCII.
pub fn generate<R: RngCore + ?Sized>(
    pool: &[u8],
    length: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    if length == 0 {
        return Err(GenerateError::ZeroLength);
    }
    let index = index_distribution(pool)?;
    Ok(generate_with(pool, &index, length, rng))
}

/// Exact uniform distribution over `0..pool.len()`.
pub(crate) fn index_distribution(pool: &[u8]) -> Result<Uniform<usize>, GenerateError> {
    Uniform::new(0, pool.len()).map_err(|_| GenerateError::EmptyCharset)
}

/// Fast path for repeated draws: the distribution is built once by the caller.
#[inline]
pub(crate) fn generate_with<R: RngCore + ?Sized>(
    pool: &[u8],
    index: &Uniform<usize>,
    length: usize,
    rng: &mut R,
) -> String {
    (0..length).map(|_| pool[index.sample(rng)] as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{self, StrengthTier};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn exact_length_and_pool_membership() {
        let mut rng = StdRng::seed_from_u64(1);
        for tier in StrengthTier::ALL {
            let pool = charset::build(tier);
            for length in [1, 8, 64] {
                let pass = generate(&pool, length, &mut rng).unwrap();
                assert_eq!(pass.len(), length);
                assert!(pass.bytes().all(|b| pool.contains(&b)));
            }
        }
    }

    #[test]
    fn every_index_is_reachable() {
        // 94 symbols, 20k draws: each symbol is expected ~212 times.
        let pool = charset::build(StrengthTier::Strong);
        let mut rng = StdRng::seed_from_u64(42);
        let pass = generate(&pool, 20_000, &mut rng).unwrap();

        let mut counts = [0usize; 256];
        for b in pass.bytes() {
            counts[b as usize] += 1;
        }

        let first = pool[0];
        let last = pool[pool.len() - 1];
        assert!(counts[first as usize] > 100, "first symbol drawn {} times", counts[first as usize]);
        assert!(counts[last as usize] > 100, "last symbol drawn {} times", counts[last as usize]);
        assert!(pool.iter().all(|&b| counts[b as usize] > 100));
    }

    #[test]
    fn single_symbol_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate(b"x", 5, &mut rng).unwrap(), "xxxxx");
    }

    #[test]
    fn rejects_empty_pool_and_zero_length() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate(b"", 4, &mut rng), Err(GenerateError::EmptyCharset));
        assert_eq!(generate(b"ab", 0, &mut rng), Err(GenerateError::ZeroLength));
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let pool = charset::build(StrengthTier::Normal);
        let a = generate(&pool, 32, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate(&pool, 32, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
