//! Per-instance scope keys.
//!
//! Every accordion owns a random six-letter key. It tags the instance's draw
//! group and log lines so several instances on one screen stay distinguishable.

use std::fmt::{self, Write as _};

use rand::Rng;

use crate::constants::{SCOPE_ALPHABET, SCOPE_LEN};

/// An opaque key made of lowercase ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId([u8; SCOPE_LEN]);

impl ScopeId {
    /// Generate a key from the thread-local RNG.
    pub fn random() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// Generate a key from a caller-supplied RNG.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut key = [0u8; SCOPE_LEN];
        for slot in &mut key {
            *slot = SCOPE_ALPHABET[rng.gen_range(0..SCOPE_ALPHABET.len())];
        }
        Self(key)
    }

    /// Parse an existing key. Returns `None` unless it is exactly six lowercase letters.
    #[cfg(test)]
    pub(crate) fn parse(key: &str) -> Option<Self> {
        let bytes = key.as_bytes();
        if bytes.len() != SCOPE_LEN || !bytes.iter().all(u8::is_ascii_lowercase) {
            return None;
        }
        let mut out = [0u8; SCOPE_LEN];
        out.copy_from_slice(bytes);
        Some(Self(out))
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({self})")
    }
}

/// Identifies one section of one accordion instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub scope: ScopeId,
    pub index: usize,
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.scope, self.index)
    }
}
