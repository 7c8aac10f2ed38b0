pub mod file_dispute;
pub mod resolve_dispute;

pub use file_dispute::*;
pub use resolve_dispute::*;
