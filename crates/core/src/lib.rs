//! `solestock-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage):
//! errors, typed identifiers, money, and the traits the record store and the
//! domain records are built on.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::Aggregate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::{ExpenseId, InventoryItemId};
pub use money::Money;
pub use value_object::ValueObject;
