use tiny_keccak::{Hasher, Keccak};

use super::HashMethod;

/// Ethereum flavoured Keccak-256. The default hash of the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keccak256;

impl HashMethod for Keccak256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut output = [0u8; 32];
        let mut hasher = Keccak::v256();
        hasher.update(data);
        hasher.finalize(&mut output);
        output
    }
}
