//! RFC 4122 version 4 UUID generation and validation.
//!
//! Generation draws 16 bytes from an RNG and stamps the version and variant
//! bits, leaving the variant nibble uniform over `8`, `9`, `a`, `b`. The RNG
//! is injectable; [`uuid`] uses the thread-local generator.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use regex::Regex;
use std::sync::LazyLock;
use uuid::{Builder, Uuid};

static UUID_V4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

/// Generate a lowercase hyphenated v4 UUID from the thread-local RNG.
pub fn uuid() -> String {
    uuid_with(&mut rand::rng())
}

/// Generate a v4 UUID drawing randomness from `rng`.
pub fn uuid_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// True when `candidate` is exactly a canonical v4 UUID, in any case.
pub fn is_uuid(candidate: &str) -> bool {
    UUID_V4_PATTERN.is_match(candidate)
}

/// Parse a canonical v4 UUID string, rejecting every other layout.
pub fn parse_uuid(candidate: &str) -> Option<Uuid> {
    if !is_uuid(candidate) {
        return None;
    }
    Uuid::parse_str(candidate).ok()
}

/// Endless source of v4 UUID strings backed by an owned RNG.
///
/// Usage:
/// ```
/// use lodex::UuidGenerator;
///
/// let first: Vec<String> = UuidGenerator::seeded(7).take(3).collect();
/// let again: Vec<String> = UuidGenerator::seeded(7).take(3).collect();
/// assert_eq!(first, again);
/// ```
#[derive(Debug)]
pub struct UuidGenerator<R = StdRng> {
    rng: R,
}

impl<R: RngCore> UuidGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_uuid(&mut self) -> String {
        uuid_with(&mut self.rng)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl UuidGenerator<StdRng> {
    /// Deterministic generator; the same seed yields the same sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: RngCore> Iterator for UuidGenerator<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_uuid())
    }
}
