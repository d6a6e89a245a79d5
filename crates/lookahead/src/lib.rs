pub mod search;
pub mod tree;
pub mod types;

pub use search::*;
pub use tree::*;
pub use types::*;
