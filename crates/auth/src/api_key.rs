//! Shared-secret internal API key.
//!
//! The secret is injected configuration (read from the environment by the
//! binary), never module-level mutable state. Comparison is constant time
//! with respect to the presented value so callers cannot learn the secret
//! byte-by-byte from response timing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("internal api key mismatch")]
    Mismatch,
}

/// Configured internal API key for service-to-service calls.
#[derive(Clone)]
pub struct InternalApiKey {
    secret: Vec<u8>,
}

impl InternalApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into().into_bytes(),
        }
    }

    /// Verify a presented credential against the configured secret.
    ///
    /// Rejects without distinguishing between wrong-length and wrong-bytes
    /// failures.
    pub fn verify(&self, presented: &str) -> Result<(), ApiKeyError> {
        if constant_time_eq(&self.secret, presented.as_bytes()) {
            Ok(())
        } else {
            Err(ApiKeyError::Mismatch)
        }
    }
}

impl std::fmt::Debug for InternalApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret, even in debug logs.
        f.debug_struct("InternalApiKey").finish_non_exhaustive()
    }
}

/// Constant-time byte comparison.
///
/// Accumulates the XOR of every byte pair instead of short-circuiting, so
/// the comparison time does not depend on where the first mismatch occurs.
/// A length mismatch is folded into the accumulator rather than returned
/// early.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let len_diff = (a.len() ^ b.len()) as u8;
    let max = a.len().max(b.len());

    let mut acc = len_diff;
    for i in 0..max {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        acc |= x ^ y;
    }
    acc == 0
}
