//! Inventory records (pairs of shoes bought for resale).
//!
//! Pure domain data and validation; storage lives in `solestock-store`.

pub mod item;

pub use item::{InventoryItem, NewInventoryItem, Sale};
