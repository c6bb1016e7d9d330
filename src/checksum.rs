//! SHA-256 fingerprints of rendered schemas

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest, stored as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(data)))
    }

    pub fn from_str(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The raw 32-byte digest; `None` if the hex text is malformed
    pub fn to_bytes(&self) -> Option<[u8; 32]> {
        if self.0.len() != 64 {
            return None;
        }
        let mut out = [0u8; 32];
        for (idx, byte) in out.iter_mut().enumerate() {
            let pair = self.0.get(idx * 2..idx * 2 + 2)?;
            *byte = u8::from_str_radix(pair, 16).ok()?;
        }
        Some(out)
    }

    pub fn verify(&self, content: &str) -> bool {
        *self == Self::from_str(content)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
