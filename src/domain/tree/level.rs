use itertools::Itertools;
use rayon::prelude::*;

use crate::domain::{digest::Digest, hash::HashMethod};

/// Outcome of reducing one level of the tree.
#[derive(Debug)]
pub(crate) struct Reduction {
    /// The level exactly as it was paired. Always of even length.
    pub paired: Vec<Digest>,
    /// One parent per consecutive pair of `paired`.
    pub parents: Vec<Digest>,
    /// Entry left without a partner, carried to the next round.
    pub orphan: Option<Digest>,
}

/// Reduce `level` to its parent level.
///
/// A pending orphan rejoins at the end of the level before the odd check, so
/// a node deferred from below pairs with the last node of a higher level.
pub(crate) fn reduce_level<Method: HashMethod>(
    mut level: Vec<Digest>,
    orphan: Option<Digest>,
    parallel_threshold: usize,
) -> Reduction {
    level.extend(orphan);

    let orphan = if level.len() % 2 == 1 {
        level.pop()
    } else {
        None
    };

    let parents = pair_level::<Method>(&level, parallel_threshold);
    Reduction {
        paired: level,
        parents,
        orphan,
    }
}

fn pair_level<Method: HashMethod>(level: &[Digest], parallel_threshold: usize) -> Vec<Digest> {
    if level.len() >= parallel_threshold {
        level
            .par_chunks_exact(2)
            .map(|pair| Method::hash_nodes(&pair[0], &pair[1]))
            .collect()
    } else {
        level
            .iter()
            .tuples()
            .map(|(left, right)| Method::hash_nodes(left, right))
            .collect()
    }
}
