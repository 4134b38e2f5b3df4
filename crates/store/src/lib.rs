//! In-memory record store for inventory and expenses.
//!
//! The store is an aggregate: commands are validated by `handle` into events and
//! events are folded into state by `apply`. Nothing is persisted; a new process
//! starts from an empty store.

pub mod command;
pub mod event;
pub mod store;

pub use command::{
    AddExpense, AddInventoryItem, RemoveExpense, RemoveInventoryItem, RemoveInventoryItemAt,
    StoreCommand,
};
pub use event::{
    ExpenseAdded, ExpenseRemoved, InventoryItemAdded, InventoryItemRemoved, StoreEvent,
};
pub use store::RecordStore;
