use anyhow::{Context, Result};
use napi::bindgen_prelude::{BigInt, Uint8Array};

use super::{
  leaf::{digest_from_js, item_from_bigint},
  options::MerkleTreeOptionsJs,
  proof::MerkleProofJs,
  to_napi_error,
};
use crate::domain::{
  item::Item,
  options::TreeOptions,
  tree::MerkleTreeKeccak256,
};

#[napi(js_name = "MerkleTree")]
pub struct MerkleTreeJs {
  inner: MerkleTreeKeccak256,
}

#[napi]
impl MerkleTreeJs {
  /// Build a tree over raw byte leaves, in the given order.
  #[napi(factory)]
  pub fn from_leaves(
    leaves: Vec<Uint8Array>,
    options: Option<MerkleTreeOptionsJs>,
  ) -> napi::Result<Self> {
    let items: Vec<Item> = leaves.iter().map(|leaf| Item::Bytes(leaf.to_vec())).collect();
    Self::build(&items, options).map_err(to_napi_error)
  }

  /// Build a tree over unsigned integers, each hashed as a 32 byte word.
  #[napi(factory)]
  pub fn from_integers(
    values: Vec<BigInt>,
    options: Option<MerkleTreeOptionsJs>,
  ) -> napi::Result<Self> {
    let items = values
      .iter()
      .map(item_from_bigint)
      .collect::<Result<Vec<_>>>()
      .map_err(to_napi_error)?;
    Self::build(&items, options).map_err(to_napi_error)
  }

  #[napi]
  pub fn root(&self) -> Uint8Array {
    self.inner.root().to_vec().into()
  }

  #[napi]
  pub fn root_hex(&self) -> String {
    self.inner.root().to_hex()
  }

  /// Leaf digests in input order.
  #[napi]
  pub fn hashes(&self) -> Vec<Uint8Array> {
    self
      .inner
      .leaves()
      .iter()
      .map(|leaf| leaf.to_vec().into())
      .collect()
  }

  #[napi]
  pub fn height(&self) -> u32 {
    self.inner.height() as u32
  }

  #[napi]
  pub fn proof(&self, data: Uint8Array) -> napi::Result<MerkleProofJs> {
    self
      .inner
      .get_proof(&Item::Bytes(data.to_vec()))
      .context("cannot build proof")
      .map(MerkleProofJs::new_inner)
      .map_err(to_napi_error)
  }

  #[napi]
  pub fn proof_for_integer(&self, value: BigInt) -> napi::Result<MerkleProofJs> {
    let item = item_from_bigint(&value).map_err(to_napi_error)?;
    self
      .inner
      .get_proof(&item)
      .context("cannot build proof")
      .map(MerkleProofJs::new_inner)
      .map_err(to_napi_error)
  }

  /// Proof for a leaf digest obtained from `hashes()` or `hashLeaf()`.
  #[napi]
  pub fn proof_by_hash(&self, leaf_hash: Uint8Array) -> napi::Result<MerkleProofJs> {
    let leaf = digest_from_js(&leaf_hash).map_err(to_napi_error)?;
    self
      .inner
      .get_proof_by_hash(leaf)
      .context("cannot build proof")
      .map(MerkleProofJs::new_inner)
      .map_err(to_napi_error)
  }

  #[napi]
  pub fn get_leaf_index(&self, leaf_hash: Uint8Array) -> napi::Result<Option<u32>> {
    let leaf = digest_from_js(&leaf_hash).map_err(to_napi_error)?;
    Ok(self.inner.get_leaf_index(&leaf).map(|i| i as u32))
  }
}

impl MerkleTreeJs {
  fn build(items: &[Item], options: Option<MerkleTreeOptionsJs>) -> Result<Self> {
    let options = options.map(TreeOptions::from).unwrap_or_default();
    let inner = MerkleTreeKeccak256::from_items_with_options(items, options)
      .context("cannot build merkle tree")?;
    Ok(Self { inner })
  }
}
