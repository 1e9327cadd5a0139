#![deny(clippy::all)]

//! Balanced merkle tree with compact inclusion proofs.
//!
//! Every internal node has exactly two children; a node left over on an odd
//! level is deferred upward until it can be paired. Bit 255 of every digest is
//! kept clear inside the tree and used in proofs to record which side each
//! sibling was on.
//!
//! ```
//! use balanced_merkle_tree::{build_tree, verify_path, Item, Keccak256};
//!
//! let items: Vec<Item> = (0u32..5).map(Item::from).collect();
//! let (tree, root) = build_tree::<Keccak256>(&items).unwrap();
//!
//! let proof = tree.get_proof(&items[4]).unwrap();
//! assert!(verify_path(&items[4], &proof, &root));
//! ```

#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod domain;

#[cfg(feature = "napi")]
mod interfaces;

pub use domain::{
    digest::{Digest, DIGEST_LEN},
    error::{MerkleError, Result},
    hash::{HashMethod, Keccak256, Sha256},
    item::Item,
    options::TreeOptions,
    proof::{path::build_path, verify_path, MerkleProof, MerkleProofKeccak256, MerkleProofSha256},
    tree::{build_tree, MerkleTree, MerkleTreeKeccak256, MerkleTreeSha256},
};
