pub mod leaf;
pub mod options;
pub mod proof;
pub mod tree;

/// Install the logger. Honours `RUST_LOG`.
#[napi]
pub fn init() {
  let _ = env_logger::try_init();
}

pub(crate) fn to_napi_error(err: anyhow::Error) -> napi::Error {
  napi::Error::from_reason(format!("{err:#}"))
}
