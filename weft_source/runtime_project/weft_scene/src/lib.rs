pub mod codec;
pub mod error;
pub mod tree;

pub use codec::*;
pub use error::SceneError;
pub use tree::SceneTree;
