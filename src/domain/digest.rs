use std::fmt;

use super::error::{MerkleError, Result};

/// Width of every digest, in bytes.
pub const DIGEST_LEN: usize = 32;

/// Mask for bit 255 of a big-endian 256-bit value, which lives in byte 0.
const DIRECTION_BIT: u8 = 0x80;

/// A 256-bit digest, stored big-endian.
///
/// Bit 255 is reserved. It is always clear on digests that live inside a tree
/// and is only ever set on proof entries, where it marks "this entry was the
/// right-hand argument of the node hash".
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Wrap a raw hash output, clearing the reserved bit.
    pub fn from_hash(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes).unflagged()
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// True when bit 255 is set.
    pub fn is_flagged(&self) -> bool {
        self.0[0] & DIRECTION_BIT != 0
    }

    /// Copy of this digest with bit 255 set.
    pub fn flagged(mut self) -> Self {
        self.0[0] |= DIRECTION_BIT;
        self
    }

    /// Copy of this digest with bit 255 cleared.
    pub fn unflagged(mut self) -> Self {
        self.0[0] &= !DIRECTION_BIT;
        self
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse a 64 character hex string, with or without a `0x` prefix.
    pub fn from_hex(value: &str) -> Result<Self> {
        let stripped = value.strip_prefix("0x").unwrap_or(value);
        let bytes = hex::decode(stripped)?;
        Self::try_from(bytes.as_slice())
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = MerkleError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|_| MerkleError::InvalidDigestLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}
