use anyhow::{Context, Result};
use napi::bindgen_prelude::{BigInt, Uint8Array};

use crate::domain::{
  digest::Digest,
  hash::{HashMethod, Keccak256},
  item::Item,
};

/// Leaf digest of raw bytes, as stored in the tree.
#[napi]
pub fn hash_leaf(data: Uint8Array) -> Uint8Array {
  Keccak256::hash_leaf(&Item::Bytes(data.to_vec()))
    .to_vec()
    .into()
}

/// Leaf digest of an unsigned integer, as stored in the tree.
#[napi]
pub fn hash_integer_leaf(value: BigInt) -> napi::Result<Uint8Array> {
  let item = item_from_bigint(&value).map_err(super::to_napi_error)?;
  Ok(Keccak256::hash_leaf(&item).to_vec().into())
}

pub(crate) fn item_from_bigint(value: &BigInt) -> Result<Item> {
  Item::from_signed_limbs(value.sign_bit, &value.words)
    .context("BigInt is not a valid tree item")
}

pub(crate) fn digest_from_js(bytes: &[u8]) -> Result<Digest> {
  Digest::try_from(bytes).context("expected a 32 byte digest")
}
