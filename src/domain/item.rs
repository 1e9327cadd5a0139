use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use super::{
    digest::DIGEST_LEN,
    error::{MerkleError, Result},
};

/// A value committed to by the tree.
///
/// Items are compared and hashed by their canonical serialization, so
/// `Unsigned(5)` and the `Word` holding 5 are the same item.
#[derive(Clone, Debug)]
pub enum Item {
    /// Opaque bytes, hashed as-is.
    Bytes(Vec<u8>),
    /// Unsigned integer, hashed as a 32 byte big-endian word.
    Unsigned(u128),
    /// Full-width 256-bit unsigned integer, big-endian.
    Word([u8; DIGEST_LEN]),
}

impl Item {
    /// Canonical byte representation fed to the hash function.
    pub fn serialize(&self) -> Cow<'_, [u8]> {
        match self {
            Item::Bytes(bytes) => Cow::Borrowed(bytes.as_slice()),
            Item::Unsigned(value) => {
                let mut word = [0u8; DIGEST_LEN];
                word[DIGEST_LEN - 16..].copy_from_slice(&value.to_be_bytes());
                Cow::Owned(word.to_vec())
            }
            Item::Word(word) => Cow::Borrowed(word.as_slice()),
        }
    }

    /// Build an integer item from 64-bit limbs, least significant first.
    pub fn from_u64_limbs(limbs: &[u64]) -> Result<Self> {
        if limbs.iter().skip(DIGEST_LEN / 8).any(|limb| *limb != 0) {
            return Err(MerkleError::UnsupportedItemType(
                "integer wider than 256 bits".to_string(),
            ));
        }

        let mut word = [0u8; DIGEST_LEN];
        for (i, limb) in limbs.iter().take(DIGEST_LEN / 8).enumerate() {
            let end = DIGEST_LEN - i * 8;
            word[end - 8..end].copy_from_slice(&limb.to_be_bytes());
        }
        Ok(Item::Word(word))
    }

    /// Like `from_u64_limbs`, for a sign-and-magnitude integer.
    pub fn from_signed_limbs(negative: bool, limbs: &[u64]) -> Result<Self> {
        if negative && limbs.iter().any(|limb| *limb != 0) {
            return Err(MerkleError::UnsupportedItemType(
                "negative integer".to_string(),
            ));
        }
        Self::from_u64_limbs(limbs)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.serialize() == other.serialize()
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialize().hash(state);
    }
}

impl From<Vec<u8>> for Item {
    fn from(bytes: Vec<u8>) -> Self {
        Item::Bytes(bytes)
    }
}

impl From<&[u8]> for Item {
    fn from(bytes: &[u8]) -> Self {
        Item::Bytes(bytes.to_vec())
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Bytes(value.as_bytes().to_vec())
    }
}

impl From<[u8; DIGEST_LEN]> for Item {
    fn from(word: [u8; DIGEST_LEN]) -> Self {
        Item::Word(word)
    }
}

macro_rules! item_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Item {
            fn from(value: $t) -> Self {
                Item::Unsigned(u128::from(value))
            }
        })*
    };
}

item_from_unsigned!(u8, u16, u32, u64);

impl From<u128> for Item {
    fn from(value: u128) -> Self {
        Item::Unsigned(value)
    }
}

impl From<usize> for Item {
    fn from(value: usize) -> Self {
        Item::Unsigned(value as u128)
    }
}

impl TryFrom<i128> for Item {
    type Error = MerkleError;

    fn try_from(value: i128) -> Result<Self> {
        u128::try_from(value)
            .map(Item::Unsigned)
            .map_err(|_| MerkleError::UnsupportedItemType(format!("negative integer {value}")))
    }
}

impl TryFrom<i64> for Item {
    type Error = MerkleError;

    fn try_from(value: i64) -> Result<Self> {
        Item::try_from(i128::from(value))
    }
}

impl TryFrom<i32> for Item {
    type Error = MerkleError;

    fn try_from(value: i32) -> Result<Self> {
        Item::try_from(i128::from(value))
    }
}
