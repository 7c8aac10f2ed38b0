//! Read-only instructions. Results travel back as Anchor return data, so
//! clients can simulate them without sending a transaction.

pub mod author_views;
pub mod work_views;
pub mod dispute_views;

pub use author_views::*;
pub use work_views::*;
pub use dispute_views::*;
