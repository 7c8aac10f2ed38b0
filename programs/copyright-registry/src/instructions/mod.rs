pub mod admin;
pub mod author;
pub mod work;
pub mod dispute;
pub mod gateway;
pub mod views;

pub use admin::*;
pub use author::*;
pub use work::*;
pub use dispute::*;
pub use gateway::*;
pub use views::*;
