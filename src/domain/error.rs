use thiserror::Error;

use super::digest::Digest;

pub type Result<T, E = MerkleError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum MerkleError {
    /// The value cannot be turned into an item (negative or wider than 256 bits).
    #[error("unsupported item type: {0}")]
    UnsupportedItemType(String),

    #[error("cannot build a merkle tree from zero items")]
    EmptyInput,

    /// The leaf digest of the requested item does not lead to the root.
    #[error("leaf {0} not found in the merkle tree")]
    ItemNotFound(Digest),

    #[error("proof does not match the merkle root")]
    ProofMismatch,

    #[error("digest must be 32 bytes, got {0}")]
    InvalidDigestLength(usize),

    #[error("proof of {0} bytes is not a sequence of 32 byte entries")]
    MalformedProof(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
