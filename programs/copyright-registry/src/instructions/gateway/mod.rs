pub mod fulfill_decryption;

pub use fulfill_decryption::*;
