use crate::domain::options::TreeOptions;

#[napi(object, js_name = "MerkleTreeOptions")]
#[derive(Clone, Default)]
pub struct MerkleTreeOptionsJs {
  /// Levels with at least this many nodes are hashed in parallel.
  pub parallel_threshold: Option<u32>,
  /// Self-check every proof against the root before returning it.
  pub check_proofs: Option<bool>,
}

impl From<MerkleTreeOptionsJs> for TreeOptions {
  fn from(options: MerkleTreeOptionsJs) -> Self {
    let defaults = TreeOptions::default();
    Self {
      parallel_threshold: options
        .parallel_threshold
        .map(|threshold| threshold as usize)
        .unwrap_or(defaults.parallel_threshold),
      check_proofs: options.check_proofs.unwrap_or(defaults.check_proofs),
    }
  }
}
