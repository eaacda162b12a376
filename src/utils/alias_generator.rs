//! Random alias generation.
//!
//! Candidates only need to be uniformly distributed over the alphabet; they
//! are not secrets, so the thread-local RNG is sufficient.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Source of alias candidates.
///
/// Implementations are pure generators that don't interact with storage.
/// Collisions are detected and retried by the caller.
pub trait AliasGenerator: Send + Sync + 'static {
    /// Produces a candidate of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Draws characters uniformly from `[A-Za-z0-9]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        new_random_string(length)
    }
}

/// Returns a string of `length` characters from the 62-character alphanumeric alphabet.
///
/// # Examples
///
/// ```ignore
/// let alias = new_random_string(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn new_random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
