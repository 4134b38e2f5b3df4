use chrono::{DateTime, Utc};
use serde::Serialize;

use solestock_core::{Event, ExpenseId, InventoryItemId};
use solestock_expenses::Expense;
use solestock_inventory::InventoryItem;

/// Event: InventoryItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItemAdded {
    pub item: InventoryItem,
    pub occurred_at: DateTime<Utc>,
}

/// Event: InventoryItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItemRemoved {
    pub item_id: InventoryItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ExpenseAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseAdded {
    pub expense: Expense,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ExpenseRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRemoved {
    pub expense_id: ExpenseId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StoreEvent {
    InventoryItemAdded(InventoryItemAdded),
    InventoryItemRemoved(InventoryItemRemoved),
    ExpenseAdded(ExpenseAdded),
    ExpenseRemoved(ExpenseRemoved),
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::InventoryItemAdded(_) => "inventory.item.added",
            StoreEvent::InventoryItemRemoved(_) => "inventory.item.removed",
            StoreEvent::ExpenseAdded(_) => "expenses.expense.added",
            StoreEvent::ExpenseRemoved(_) => "expenses.expense.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::InventoryItemAdded(e) => e.occurred_at,
            StoreEvent::InventoryItemRemoved(e) => e.occurred_at,
            StoreEvent::ExpenseAdded(e) => e.occurred_at,
            StoreEvent::ExpenseRemoved(e) => e.occurred_at,
        }
    }
}
