pub mod digest;
pub mod error;
pub mod hash;
pub mod item;
pub mod options;
pub mod proof;
pub mod tree;
