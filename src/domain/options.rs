/// Tuning knobs for building a tree and deriving proofs from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeOptions {
    /// Levels with at least this many entries are hashed with rayon.
    pub parallel_threshold: usize,
    /// Verify every derived proof against the root before handing it out.
    pub check_proofs: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024,
            check_proofs: true,
        }
    }
}
