pub mod board;
pub mod catalog;
pub mod logger;
pub mod notation;
pub mod types;

pub use board::*;
pub use catalog::*;
pub use notation::*;
pub use types::*;
pub use logger::GameLogger;
