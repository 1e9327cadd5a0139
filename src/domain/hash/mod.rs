use super::{digest::Digest, item::Item};

/// Hashing scheme of the tree, on top of a 32 byte hash primitive.
///
/// Both leaf and node hashes clear bit 255 of the primitive's output so the bit
/// stays free for the direction flag of proof entries.
pub trait HashMethod {
    /// The raw hash primitive.
    fn hash(data: &[u8]) -> [u8; 32];

    /// Hash an item's canonical serialization.
    fn hash_leaf(item: &Item) -> Digest {
        Digest::from_hash(Self::hash(&item.serialize()))
    }

    /// Hash two nodes, `left` first. Not commutative.
    fn hash_nodes(left: &Digest, right: &Digest) -> Digest {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(left.as_bytes());
        buf[32..].copy_from_slice(right.as_bytes());
        Digest::from_hash(Self::hash(&buf))
    }
}

pub mod keccak256;
pub mod sha256;

pub use keccak256::Keccak256;
pub use sha256::Sha256;
