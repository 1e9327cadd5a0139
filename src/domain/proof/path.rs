use crate::domain::{
    digest::Digest,
    error::{MerkleError, Result},
    hash::HashMethod,
    item::Item,
    tree::MerkleTree,
};

use super::MerkleProof;

/// Derive the inclusion proof of `item` from `tree`.
pub fn build_path<Method: HashMethod>(
    item: &Item,
    tree: &MerkleTree<Method>,
) -> Result<MerkleProof<Method>> {
    tree.get_proof(item)
}

/// Walk the levels upward from `leaf`, collecting one sibling per level the
/// running digest is paired in.
///
/// A level that does not contain the running digest is skipped: the digest was
/// deferred as an orphan and is paired higher up. A right-hand sibling is
/// recorded with bit 255 set, a left-hand sibling as stored.
pub(crate) fn derive_path<Method: HashMethod>(
    levels: &[Vec<Digest>],
    leaf: Digest,
) -> Result<Vec<Digest>> {
    let mut current = leaf;
    let mut path = Vec::new();

    for level in levels {
        if level.len() == 1 {
            return if level[0] == current {
                Ok(path)
            } else {
                Err(MerkleError::ItemNotFound(leaf))
            };
        }

        let Some(idx) = level.iter().position(|digest| *digest == current) else {
            continue;
        };

        if idx % 2 == 0 {
            let sibling = level[idx + 1];
            path.push(sibling.flagged());
            current = Method::hash_nodes(&current, &sibling);
        } else {
            let sibling = level[idx - 1];
            path.push(sibling);
            current = Method::hash_nodes(&sibling, &current);
        }
    }

    Err(MerkleError::ItemNotFound(leaf))
}
