//! Random slug generation.
//!
//! Slugs are 8 characters drawn independently and uniformly from the
//! 62-symbol alphanumeric alphabet, a keyspace of 62^8 ≈ 2.2e14. The goal
//! is collision resistance at moderate scale, not unguessability, so a
//! statistically uniform thread-local RNG is sufficient.

use rand::Rng;

/// Fixed slug length in characters.
pub const SLUG_LENGTH: usize = 8;

const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of candidate slugs.
///
/// Isolated behind a trait so the allocator's retry loop can be driven by
/// a deterministic candidate sequence in tests, forced collisions included.
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    /// Produces one candidate slug.
    fn generate(&self) -> String;
}

/// Uniform random generator over the alphanumeric alphabet.
pub struct RandomSlugGenerator;

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..SLUG_LENGTH)
            .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
            .collect()
    }
}
