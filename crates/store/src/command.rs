use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use solestock_core::{ExpenseId, InventoryItemId};
use solestock_expenses::NewExpense;
use solestock_inventory::NewInventoryItem;

/// Command: AddInventoryItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddInventoryItem {
    pub item_id: InventoryItemId,
    pub item: NewInventoryItem,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveInventoryItem (by identity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveInventoryItem {
    pub item_id: InventoryItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveInventoryItemAt (by position in insertion order).
///
/// Positions shift after every removal; prefer [`RemoveInventoryItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveInventoryItemAt {
    pub index: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AddExpense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddExpense {
    pub expense_id: ExpenseId,
    pub expense: NewExpense,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveExpense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveExpense {
    pub expense_id: ExpenseId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreCommand {
    AddInventoryItem(AddInventoryItem),
    RemoveInventoryItem(RemoveInventoryItem),
    RemoveInventoryItemAt(RemoveInventoryItemAt),
    AddExpense(AddExpense),
    RemoveExpense(RemoveExpense),
}
