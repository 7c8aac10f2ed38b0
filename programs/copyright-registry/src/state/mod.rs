pub mod registry;
pub mod author;
pub mod work;
pub mod dispute;
pub mod decryption;

pub use registry::*;
pub use author::*;
pub use work::*;
pub use dispute::*;
pub use decryption::*;

pub const REGISTRY_SEED: &[u8] = b"registry";
pub const AUTHOR_SEED: &[u8] = b"author";
pub const WORK_SEED: &[u8] = b"work";
pub const DISPUTE_SEED: &[u8] = b"dispute";
pub const DECRYPTION_SEED: &[u8] = b"decryption";
