use sha2::{digest::FixedOutput, Digest as _};

use super::HashMethod;

/// Single SHA-256.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256;

impl HashMethod for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = sha2::Sha256::new();
        hasher.update(data);
        hasher.finalize_fixed().into()
    }
}
