use log::{debug, info, trace};
use rayon::prelude::*;
use std::marker::PhantomData;
use std::time::Instant;

use super::{
    digest::Digest,
    error::{MerkleError, Result},
    hash::{HashMethod, Keccak256, Sha256},
    item::Item,
    options::TreeOptions,
    proof::{path::derive_path, MerkleProof},
};

mod level;

use level::reduce_level;

/// A balanced merkle tree: every internal node has exactly two children.
///
/// When a level has an odd number of nodes its last node is deferred upward
/// and paired with the last node of a higher level. For five items:
///
/// ```text
///         r
///        / \
///      n3   L4
///     /  \
///   n1    n2
///  / \   / \
/// L0 L1 L2 L3
/// ```
///
/// `levels` keeps every level as it was paired, so the example above is stored
/// as `[L0 L1 L2 L3] [n1 n2] [n3 L4] [r]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree<Method: HashMethod> {
    leaves: Vec<Digest>,
    levels: Vec<Vec<Digest>>,
    root: Digest,
    options: TreeOptions,
    method: PhantomData<Method>,
}

pub type MerkleTreeKeccak256 = MerkleTree<Keccak256>;
pub type MerkleTreeSha256 = MerkleTree<Sha256>;

impl<Method: HashMethod> MerkleTree<Method> {
    /// Build a tree from items with the default options.
    pub fn from_items(items: &[Item]) -> Result<Self> {
        Self::from_items_with_options(items, TreeOptions::default())
    }

    pub fn from_items_with_options(items: &[Item], options: TreeOptions) -> Result<Self> {
        if items.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let hash_start = Instant::now();
        let leaves: Vec<Digest> = if items.len() >= options.parallel_threshold {
            items.par_iter().map(Method::hash_leaf).collect()
        } else {
            items.iter().map(Method::hash_leaf).collect()
        };
        debug!("Hashing {} leaves took {:?}", leaves.len(), hash_start.elapsed());

        Self::from_leaves_hashes_with_options(leaves, options)
    }

    /// Build a tree from already-hashed leaves. Bit 255 of each leaf is cleared.
    pub fn from_leaves_hashes(leaves: Vec<Digest>) -> Result<Self> {
        Self::from_leaves_hashes_with_options(leaves, TreeOptions::default())
    }

    pub fn from_leaves_hashes_with_options(
        leaves: Vec<Digest>,
        options: TreeOptions,
    ) -> Result<Self> {
        let total_start = Instant::now();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }
        let leaves: Vec<Digest> = leaves.into_iter().map(Digest::unflagged).collect();

        // A single item is its own root.
        if leaves.len() == 1 {
            return Ok(Self {
                root: leaves[0],
                levels: vec![leaves.clone()],
                leaves,
                options,
                method: PhantomData,
            });
        }

        let mut levels = Vec::new();
        let mut level = leaves.clone();
        let mut orphan = None;
        loop {
            let reduction = reduce_level::<Method>(level, orphan, options.parallel_threshold);
            trace!(
                "Level {}: paired {} nodes, orphan carried: {}",
                levels.len(),
                reduction.paired.len(),
                reduction.orphan.is_some()
            );

            levels.push(reduction.paired);
            orphan = reduction.orphan;
            level = reduction.parents;
            debug_assert!(!level.is_empty(), "reduction produced an empty level");

            if level.len() == 1 && orphan.is_none() {
                break;
            }
        }

        let root = level[0];
        levels.push(level);

        info!(
            "Built merkle tree of {} leaves and {} levels in {:?}",
            leaves.len(),
            levels.len(),
            total_start.elapsed()
        );

        Ok(Self {
            leaves,
            levels,
            root,
            options,
            method: PhantomData,
        })
    }

    pub fn root(&self) -> Digest {
        self.root
    }

    /// Every level, leaves first, as used for pairing.
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// Leaf digests in input order, orphans included.
    pub fn leaves(&self) -> &[Digest] {
        &self.leaves
    }

    /// Number of non-root levels.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.get_leaf_index(&Method::hash_leaf(item)).is_some()
    }

    /// Position of the first leaf with this digest, in input order.
    pub fn get_leaf_index(&self, leaf_hash: &Digest) -> Option<usize> {
        self.leaves.iter().position(|leaf| leaf == leaf_hash)
    }

    /// Derive the inclusion proof of `item`.
    pub fn get_proof(&self, item: &Item) -> Result<MerkleProof<Method>> {
        self.get_proof_by_hash(Method::hash_leaf(item))
    }

    /// Derive the inclusion proof of an already-hashed leaf.
    ///
    /// Only level-0 digests are accepted; an internal node is not a leaf even
    /// though a path can be walked from it.
    pub fn get_proof_by_hash(&self, leaf_hash: Digest) -> Result<MerkleProof<Method>> {
        if self.get_leaf_index(&leaf_hash).is_none() {
            return Err(MerkleError::ItemNotFound(leaf_hash));
        }
        let proof = MerkleProof::new(derive_path::<Method>(&self.levels, leaf_hash)?);

        if self.options.check_proofs && !proof.verify(&self.root, &leaf_hash) {
            return Err(MerkleError::ProofMismatch);
        }
        Ok(proof)
    }
}

/// Build the tree over `items` and return it with its root.
pub fn build_tree<Method: HashMethod>(items: &[Item]) -> Result<(MerkleTree<Method>, Digest)> {
    let tree = MerkleTree::from_items(items)?;
    let root = tree.root();
    Ok((tree, root))
}
