pub mod register_author;

pub use register_author::*;
