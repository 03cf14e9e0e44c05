pub mod forage;
pub mod format;

pub use forage::*;
pub use format::*;
