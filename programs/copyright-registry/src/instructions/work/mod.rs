pub mod register_work;

pub use register_work::*;
