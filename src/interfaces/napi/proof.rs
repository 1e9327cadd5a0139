use anyhow::Context;
use napi::bindgen_prelude::{BigInt, Uint8Array};

use super::{
  leaf::{digest_from_js, item_from_bigint},
  to_napi_error,
};
use crate::domain::{item::Item, proof::MerkleProofKeccak256};

/// JavaScript-facing MerkleProof wrapper.
#[napi(js_name = "MerkleProof")]
pub struct MerkleProofJs {
  inner: MerkleProofKeccak256,
}

#[napi]
impl MerkleProofJs {
  /// Each entry is a 32 byte digest; bit 255 marks a right-hand sibling.
  #[napi(constructor)]
  pub fn new(proof_hashes: Vec<Uint8Array>) -> napi::Result<Self> {
    let entries = proof_hashes
      .iter()
      .enumerate()
      .map(|(i, hash)| digest_from_js(hash).with_context(|| format!("invalid proof entry {i}")))
      .collect::<anyhow::Result<Vec<_>>>()
      .map_err(to_napi_error)?;

    Ok(Self {
      inner: MerkleProofKeccak256::new(entries),
    })
  }

  #[napi(factory)]
  pub fn from_bytes(bytes: Uint8Array) -> napi::Result<Self> {
    let inner = MerkleProofKeccak256::from_bytes(&bytes)
      .context("invalid proof bytes")
      .map_err(to_napi_error)?;
    Ok(Self { inner })
  }

  #[napi]
  pub fn to_bytes(&self) -> Uint8Array {
    self.inner.to_bytes().into()
  }

  #[napi]
  pub fn proof_hashes(&self) -> Vec<Uint8Array> {
    self
      .inner
      .entries()
      .iter()
      .map(|entry| entry.to_vec().into())
      .collect()
  }

  #[napi]
  pub fn proof_hashes_hex(&self) -> Vec<String> {
    self.inner.proof_hashes_hex()
  }

  /// Hash `data` as a leaf and check it leads to `root`.
  #[napi]
  pub fn verify(&self, root: Uint8Array, data: Uint8Array) -> napi::Result<bool> {
    let root = digest_from_js(&root).map_err(to_napi_error)?;
    Ok(self.inner.verify_item(&root, &Item::Bytes(data.to_vec())))
  }

  #[napi]
  pub fn verify_integer(&self, root: Uint8Array, value: BigInt) -> napi::Result<bool> {
    let root = digest_from_js(&root).map_err(to_napi_error)?;
    let item = item_from_bigint(&value).map_err(to_napi_error)?;
    Ok(self.inner.verify_item(&root, &item))
  }

  /// Return the root reached when starting from `leaf_hash`.
  #[napi]
  pub fn root(&self, leaf_hash: Uint8Array) -> napi::Result<Uint8Array> {
    let leaf = digest_from_js(&leaf_hash).map_err(to_napi_error)?;
    Ok(self.inner.root(&leaf).to_vec().into())
  }

  #[napi]
  pub fn root_hex(&self, leaf_hash: Uint8Array) -> napi::Result<String> {
    let leaf = digest_from_js(&leaf_hash).map_err(to_napi_error)?;
    Ok(self.inner.root(&leaf).to_hex())
  }
}

impl MerkleProofJs {
  /// Wrap a proof derived on the Rust side.
  pub fn new_inner(inner: MerkleProofKeccak256) -> Self {
    MerkleProofJs { inner }
  }
}
