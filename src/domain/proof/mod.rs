use std::marker::PhantomData;

use super::{
    digest::{Digest, DIGEST_LEN},
    error::{MerkleError, Result},
    hash::{HashMethod, Keccak256, Sha256},
    item::Item,
};

pub mod path;

/// An inclusion proof: one sibling digest per level the leaf was paired in.
///
/// Bit 255 of an entry tells which side it was on. Set means the sibling was
/// the right-hand argument, so the order is `(current, sibling)`. Clear means
/// the sibling was on the left, so the order is `(sibling, current)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MerkleProof<Method: HashMethod> {
    entries: Vec<Digest>,
    method: PhantomData<Method>,
}

pub type MerkleProofKeccak256 = MerkleProof<Keccak256>;
pub type MerkleProofSha256 = MerkleProof<Sha256>;

impl<Method: HashMethod> MerkleProof<Method> {
    pub fn new(entries: Vec<Digest>) -> Self {
        Self {
            entries,
            method: PhantomData,
        }
    }

    /// Raw entries, direction bit included.
    pub fn entries(&self) -> &[Digest] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decoded entries as `(sibling_is_left, sibling)`, with bit 255 cleared.
    pub fn steps(&self) -> impl Iterator<Item = (bool, Digest)> + '_ {
        self.entries
            .iter()
            .map(|entry| (!entry.is_flagged(), entry.unflagged()))
    }

    /// Compute the root reached from `leaf_hash` by folding over the entries.
    pub fn root(&self, leaf_hash: &Digest) -> Digest {
        self.steps()
            .fold(*leaf_hash, |current, (is_left, sibling)| {
                if is_left {
                    Method::hash_nodes(&sibling, &current)
                } else {
                    Method::hash_nodes(&current, &sibling)
                }
            })
    }

    /// Verify a proof by comparing the recomputed root with `root`.
    pub fn verify(&self, root: &Digest, leaf_hash: &Digest) -> bool {
        self.root(leaf_hash) == *root
    }

    /// Like `verify`, but hashes `item` to get the leaf first.
    pub fn verify_item(&self, root: &Digest, item: &Item) -> bool {
        self.verify(root, &Method::hash_leaf(item))
    }

    /// Entries concatenated, 32 bytes each.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|entry| entry.as_bytes().iter().copied())
            .collect()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % DIGEST_LEN != 0 {
            return Err(MerkleError::MalformedProof(bytes.len()));
        }
        let entries = bytes
            .chunks_exact(DIGEST_LEN)
            .map(Digest::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(entries))
    }

    pub fn proof_hashes_hex(&self) -> Vec<String> {
        self.entries.iter().map(Digest::to_hex).collect()
    }
}

/// Check that `proof` leads from `item` to `root`.
pub fn verify_path<Method: HashMethod>(
    item: &Item,
    proof: &MerkleProof<Method>,
    root: &Digest,
) -> bool {
    proof.verify_item(root, item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree::build_tree;

    fn leaf(data: &str) -> Digest {
        Keccak256::hash_leaf(&Item::from(data))
    }

    #[test]
    fn test_no_steps_proof() {
        // If the proof has no siblings, the leaf must be the root itself
        let proof = MerkleProofKeccak256::new(vec![]);
        let leaf_hash = leaf("single_leaf");

        assert!(
            proof.verify(&leaf_hash, &leaf_hash),
            "No-step proof must succeed only when leaf == root"
        );
        assert!(
            !proof.verify(&leaf("some_other_data"), &leaf_hash),
            "Should fail if root != leaf for a no-step proof"
        );
    }

    #[test]
    fn test_single_step_left() {
        // Unflagged sibling is on the left => hash_nodes(sibling, current)
        let leaf_hash = leaf("leaf_data");
        let sibling_hash = leaf("sibling_data");
        let proof = MerkleProofKeccak256::new(vec![sibling_hash]);

        let correct_root = Keccak256::hash_nodes(&sibling_hash, &leaf_hash);
        assert!(
            proof.verify(&correct_root, &leaf_hash),
            "Proof must succeed if the sibling is on the left"
        );

        let incorrect_root = Keccak256::hash_nodes(&leaf_hash, &sibling_hash);
        assert!(
            !proof.verify(&incorrect_root, &leaf_hash),
            "Swapping the order should fail"
        );
    }

    #[test]
    fn test_single_step_right() {
        // Flagged sibling is on the right => hash_nodes(current, sibling)
        let leaf_hash = leaf("left_leaf");
        let sibling_hash = leaf("right_leaf");
        let proof = MerkleProofKeccak256::new(vec![sibling_hash.flagged()]);

        let correct_root = Keccak256::hash_nodes(&leaf_hash, &sibling_hash);
        assert!(
            proof.verify(&correct_root, &leaf_hash),
            "Right-step proof must succeed with correct order"
        );

        let incorrect_root = Keccak256::hash_nodes(&sibling_hash, &leaf_hash);
        assert!(
            !proof.verify(&incorrect_root, &leaf_hash),
            "Inverted order must fail"
        );
    }

    #[test]
    fn test_multi_step_proof() {
        //         R
        //       /   \
        //     N1     N2
        //    /  \   /  \
        //   A    B C    D
        let a = leaf("A");
        let b = leaf("B");
        let c = leaf("C");
        let d = leaf("D");

        let n1 = Keccak256::hash_nodes(&a, &b);
        let n2 = Keccak256::hash_nodes(&c, &d);
        let r = Keccak256::hash_nodes(&n1, &n2);

        // Proof for B: A on the left, then N2 on the right
        let proof = MerkleProofKeccak256::new(vec![a, n2.flagged()]);
        assert!(
            proof.verify(&r, &b),
            "Manually built multi-step proof must match the final root"
        );
        assert_eq!(
            proof.steps().collect::<Vec<_>>(),
            vec![(true, a), (false, n2)]
        );

        assert!(!proof.verify(&leaf("fake_root"), &b), "Wrong root must fail");
    }

    #[test]
    fn test_malicious_proof_fails() {
        let items: Vec<Item> = (0..13u32).map(Item::from).collect();
        let (tree, root) = build_tree::<Keccak256>(&items).unwrap();
        let target = &items[6];
        let proof = tree.get_proof(target).unwrap();
        assert!(verify_path(target, &proof, &root));

        for i in 0..proof.len() {
            // Flip the direction bit
            let mut entries = proof.entries().to_vec();
            entries[i] = if entries[i].is_flagged() {
                entries[i].unflagged()
            } else {
                entries[i].flagged()
            };
            assert!(
                !verify_path(target, &MerkleProofKeccak256::new(entries), &root),
                "Flipping the direction of entry {} must fail",
                i
            );

            // Corrupt the sibling value
            let mut entries = proof.entries().to_vec();
            let mut bytes = *entries[i].as_bytes();
            bytes[DIGEST_LEN - 1] ^= 0x01;
            entries[i] = Digest::new(bytes);
            assert!(
                !verify_path(target, &MerkleProofKeccak256::new(entries), &root),
                "Corrupting entry {} must fail",
                i
            );
        }

        assert!(
            !verify_path(&items[7], &proof, &root),
            "Substituting another leaf must fail"
        );

        let mut truncated = proof.entries().to_vec();
        truncated.pop();
        assert!(
            !verify_path(target, &MerkleProofKeccak256::new(truncated), &root),
            "An incomplete proof must fail verification"
        );
    }

    #[test]
    fn test_bytes_encoding() {
        let a = leaf("A");
        let b = leaf("B").flagged();
        let proof = MerkleProofKeccak256::new(vec![a, b]);

        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), 2 * DIGEST_LEN);
        assert_eq!(&bytes[..DIGEST_LEN], a.as_bytes());
        assert_eq!(bytes[DIGEST_LEN] & 0x80, 0x80, "Direction bit stays in place");
        assert_eq!(MerkleProofKeccak256::from_bytes(&bytes).unwrap(), proof);

        assert!(MerkleProofKeccak256::from_bytes(&[]).unwrap().is_empty());
        assert!(matches!(
            MerkleProofKeccak256::from_bytes(&bytes[..40]),
            Err(MerkleError::MalformedProof(40))
        ));
    }

    #[test]
    fn test_proof_hashes_hex() {
        let sibling = leaf("sibling_data").flagged();
        let proof = MerkleProofKeccak256::new(vec![sibling]);

        let all_hashes = proof.proof_hashes_hex();
        assert_eq!(all_hashes.len(), 1, "One-step proof must have exactly 1 sibling");
        assert_eq!(all_hashes[0], sibling.to_hex());
        assert_eq!(Digest::from_hex(&all_hashes[0]).unwrap(), sibling);
    }

    #[test]
    fn test_sha256_proofs_do_not_cross_verify() {
        let items: Vec<Item> = (0..4u32).map(Item::from).collect();
        let (keccak_tree, keccak_root) = build_tree::<Keccak256>(&items).unwrap();
        let (_, sha_root) = build_tree::<Sha256>(&items).unwrap();
        assert_ne!(keccak_root, sha_root);

        let proof = keccak_tree.get_proof(&items[2]).unwrap();
        let foreign = MerkleProofSha256::new(proof.entries().to_vec());
        assert!(!verify_path(&items[2], &foreign, &sha_root));
        assert!(!verify_path(&items[2], &foreign, &keccak_root));
    }
}
