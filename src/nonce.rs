use {
    crate::{
        source::{SystemClock, TickSource},
        timestamp::Timestamp,
    },
    tracing::trace,
};

/// Symbols a nonce is drawn from.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default number of characters in a generated nonce.
pub const DEFAULT_NONCE_LENGTH: usize = 32;

/// Generator of random alphanumeric strings (`[A-Za-z0-9]`).
///
/// Meant for request signing nonces and de-duplication identifiers.
///
/// **Not cryptographically secure.** The engine is a general purpose PRNG
/// seeded from the lower 32 bits of the current timestamp, so output can be
/// predicted by anyone who can guess the time of construction. Do not use it
/// where an adversary must not be able to guess the value.
#[derive(Debug)]
pub struct NonceGenerator {
    rng: fastrand::Rng,
    length: usize,
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceGenerator {
    /// Creates a generator producing nonces of [`DEFAULT_NONCE_LENGTH`].
    pub fn new() -> Self {
        Self::with_length(DEFAULT_NONCE_LENGTH)
    }

    /// Creates a generator producing nonces of `length` characters.
    pub fn with_length(length: usize) -> Self {
        Self::from_source(&SystemClock, length)
    }

    /// Creates a generator seeded from the current time of `source`.
    ///
    /// Two generators built from the same tick value produce the same
    /// sequence.
    pub fn from_source<S: TickSource + ?Sized>(source: &S, length: usize) -> Self {
        let seed = Timestamp::now_from(source).to_interval() as u32;
        trace!(seed, length, "Seeding nonce generator");
        Self {
            rng: fastrand::Rng::with_seed(u64::from(seed)),
            length,
        }
    }

    /// Generates a nonce of [`length()`](Self::length()) characters.
    pub fn generate(&mut self) -> String {
        (0..self.length)
            .map(|_| char::from(ALPHABET[self.rng.usize(..ALPHABET.len())]))
            .collect()
    }

    /// Length of generated nonces.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Sets the length of generated nonces.
    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }
}
