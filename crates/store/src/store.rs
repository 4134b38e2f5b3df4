use chrono::Utc;

use solestock_core::entity::position_of;
use solestock_core::{Aggregate, DomainError, DomainResult, Event, ExpenseId, InventoryItemId};
use solestock_expenses::{Expense, NewExpense};
use solestock_inventory::{InventoryItem, NewInventoryItem};

use crate::command::{
    AddExpense, AddInventoryItem, RemoveExpense, RemoveInventoryItem, RemoveInventoryItemAt,
    StoreCommand,
};
use crate::event::{
    ExpenseAdded, ExpenseRemoved, InventoryItemAdded, InventoryItemRemoved, StoreEvent,
};

/// The two record collections, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    inventory: Vec<InventoryItem>,
    expenses: Vec<Expense>,
    version: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn inventory_item(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        position_of(&self.inventory, &id).map(|i| &self.inventory[i])
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        position_of(&self.expenses, &id).map(|i| &self.expenses[i])
    }

    /// Validate and append an item; returns the stored record.
    pub fn add_inventory_item(&mut self, item: NewInventoryItem) -> DomainResult<InventoryItem> {
        let item_id = InventoryItemId::new();
        self.run(StoreCommand::AddInventoryItem(AddInventoryItem {
            item_id,
            item,
            occurred_at: Utc::now(),
        }))?;
        self.inventory_item(item_id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    /// Remove by identity. Returns `false` (and changes nothing) for unknown ids.
    pub fn remove_inventory_item(&mut self, item_id: InventoryItemId) -> bool {
        self.run(StoreCommand::RemoveInventoryItem(RemoveInventoryItem {
            item_id,
            occurred_at: Utc::now(),
        }))
        .map(|events| !events.is_empty())
        .unwrap_or(false)
    }

    /// Remove by position. Out-of-range positions are ignored.
    pub fn remove_inventory_item_at(&mut self, index: usize) -> Option<InventoryItem> {
        let removed = self.inventory.get(index).cloned()?;
        self.run(StoreCommand::RemoveInventoryItemAt(RemoveInventoryItemAt {
            index,
            occurred_at: Utc::now(),
        }))
        .ok()
        .filter(|events| !events.is_empty())
        .map(|_| removed)
    }

    /// Validate and append an expense with a freshly generated id.
    pub fn add_expense(&mut self, expense: NewExpense) -> DomainResult<Expense> {
        let expense_id = ExpenseId::new();
        self.run(StoreCommand::AddExpense(AddExpense {
            expense_id,
            expense,
            occurred_at: Utc::now(),
        }))?;
        self.expense(expense_id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    /// Remove by identity. Returns `false` (and changes nothing) for unknown ids.
    pub fn remove_expense(&mut self, expense_id: ExpenseId) -> bool {
        self.run(StoreCommand::RemoveExpense(RemoveExpense {
            expense_id,
            occurred_at: Utc::now(),
        }))
        .map(|events| !events.is_empty())
        .unwrap_or(false)
    }

    fn run(&mut self, command: StoreCommand) -> DomainResult<Vec<StoreEvent>> {
        match self.execute(&command) {
            Ok(events) => {
                let base = self.version - events.len() as u64;
                for (applied, event) in (base + 1..).zip(&events) {
                    tracing::info!(
                        event_type = event.event_type(),
                        version = applied,
                        "record store updated"
                    );
                }
                if events.is_empty() {
                    tracing::debug!(?command, "command changed nothing");
                }
                Ok(events)
            }
            Err(err) => {
                tracing::warn!(error = %err, "command rejected");
                Err(err)
            }
        }
    }

    fn handle_add_item(&self, cmd: &AddInventoryItem) -> DomainResult<Vec<StoreEvent>> {
        if position_of(&self.inventory, &cmd.item_id).is_some() {
            return Err(DomainError::conflict("inventory item already exists"));
        }
        let item = cmd.item.clone().into_item(cmd.item_id)?;
        Ok(vec![StoreEvent::InventoryItemAdded(InventoryItemAdded {
            item,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_item(&self, cmd: &RemoveInventoryItem) -> DomainResult<Vec<StoreEvent>> {
        if position_of(&self.inventory, &cmd.item_id).is_none() {
            return Ok(vec![]);
        }
        Ok(vec![StoreEvent::InventoryItemRemoved(InventoryItemRemoved {
            item_id: cmd.item_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_item_at(&self, cmd: &RemoveInventoryItemAt) -> DomainResult<Vec<StoreEvent>> {
        let Some(item) = self.inventory.get(cmd.index) else {
            return Ok(vec![]);
        };
        Ok(vec![StoreEvent::InventoryItemRemoved(InventoryItemRemoved {
            item_id: item.id_typed(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_add_expense(&self, cmd: &AddExpense) -> DomainResult<Vec<StoreEvent>> {
        if position_of(&self.expenses, &cmd.expense_id).is_some() {
            return Err(DomainError::conflict("expense already exists"));
        }
        let expense = cmd.expense.clone().into_expense(cmd.expense_id)?;
        Ok(vec![StoreEvent::ExpenseAdded(ExpenseAdded {
            expense,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_expense(&self, cmd: &RemoveExpense) -> DomainResult<Vec<StoreEvent>> {
        if position_of(&self.expenses, &cmd.expense_id).is_none() {
            return Ok(vec![]);
        }
        Ok(vec![StoreEvent::ExpenseRemoved(ExpenseRemoved {
            expense_id: cmd.expense_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}

impl Aggregate for RecordStore {
    type Command = StoreCommand;
    type Event = StoreEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StoreEvent::InventoryItemAdded(e) => {
                self.inventory.push(e.item.clone());
            }
            StoreEvent::InventoryItemRemoved(e) => {
                // Vec::remove keeps the relative order of the remaining items.
                if let Some(pos) = position_of(&self.inventory, &e.item_id) {
                    self.inventory.remove(pos);
                }
            }
            StoreEvent::ExpenseAdded(e) => {
                self.expenses.push(e.expense.clone());
            }
            StoreEvent::ExpenseRemoved(e) => {
                if let Some(pos) = position_of(&self.expenses, &e.expense_id) {
                    self.expenses.remove(pos);
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StoreCommand::AddInventoryItem(cmd) => self.handle_add_item(cmd),
            StoreCommand::RemoveInventoryItem(cmd) => self.handle_remove_item(cmd),
            StoreCommand::RemoveInventoryItemAt(cmd) => self.handle_remove_item_at(cmd),
            StoreCommand::AddExpense(cmd) => self.handle_add_expense(cmd),
            StoreCommand::RemoveExpense(cmd) => self.handle_remove_expense(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use solestock_core::{Entity, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shoe(sku: &str) -> NewInventoryItem {
        NewInventoryItem::new(sku, "Yeezy 350", 9.0, Money::from_cents(23_000), date(2024, 2, 1))
    }

    fn gas(cents: i64) -> NewExpense {
        NewExpense::new("Gas", Money::from_cents(cents), date(2024, 2, 3))
    }

    #[test]
    fn add_inventory_item_appends_in_order() {
        let mut store = RecordStore::new();
        store.add_inventory_item(shoe("A")).unwrap();
        store.add_inventory_item(shoe("B")).unwrap();

        let skus: Vec<_> = store.inventory().iter().map(|i| i.sku()).collect();
        assert_eq!(skus, vec!["A", "B"]);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn invalid_item_is_rejected_without_state_change() {
        let mut store = RecordStore::new();
        let mut bad = shoe("A");
        bad.price_sold = Some(Money::from_cents(100));

        let err = store.add_inventory_item(bad).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.inventory().is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn remove_inventory_item_at_removes_exactly_that_position() {
        let mut store = RecordStore::new();
        for sku in ["A", "B", "C"] {
            store.add_inventory_item(shoe(sku)).unwrap();
        }

        let removed = store.remove_inventory_item_at(1).unwrap();
        assert_eq!(removed.sku(), "B");

        let skus: Vec<_> = store.inventory().iter().map(|i| i.sku()).collect();
        assert_eq!(skus, vec!["A", "C"]);
    }

    #[test]
    fn remove_inventory_item_at_out_of_range_is_a_no_op() {
        let mut store = RecordStore::new();
        store.add_inventory_item(shoe("A")).unwrap();
        let before = store.clone();

        assert!(store.remove_inventory_item_at(5).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn remove_inventory_item_by_id() {
        let mut store = RecordStore::new();
        let a = store.add_inventory_item(shoe("A")).unwrap();
        let b = store.add_inventory_item(shoe("A")).unwrap();

        assert!(store.remove_inventory_item(*a.id()));
        assert_eq!(store.inventory().len(), 1);
        assert_eq!(store.inventory()[0].id(), b.id());

        assert!(!store.remove_inventory_item(*a.id()));
        assert_eq!(store.inventory().len(), 1);
    }

    #[test]
    fn remove_expense_unknown_id_is_a_no_op() {
        let mut store = RecordStore::new();
        store.add_expense(gas(2_000)).unwrap();
        let before = store.clone();

        assert!(!store.remove_expense(ExpenseId::new()));
        assert_eq!(store, before);
    }

    #[test]
    fn add_then_remove_expense() {
        let mut store = RecordStore::new();
        let first = store.add_expense(gas(2_000)).unwrap();
        let second = store.add_expense(gas(1_500)).unwrap();
        assert_ne!(first.id(), second.id());

        assert!(store.remove_expense(*first.id()));
        assert_eq!(store.expenses(), &[second]);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let store = RecordStore::new();
        let cmd = StoreCommand::AddExpense(AddExpense {
            expense_id: ExpenseId::new(),
            expense: gas(100),
            occurred_at: Utc::now(),
        });

        let events = store.handle(&cmd).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "expenses.expense.added");
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn duplicate_expense_id_conflicts() {
        let mut store = RecordStore::new();
        let expense_id = ExpenseId::new();
        let cmd = StoreCommand::AddExpense(AddExpense {
            expense_id,
            expense: gas(100),
            occurred_at: Utc::now(),
        });

        store.execute(&cmd).unwrap();
        let err = store.execute(&cmd).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn execute_advances_version_once_per_event() {
        let mut store = RecordStore::new();
        store.add_expense(gas(100)).unwrap();
        let before = store.version();

        let events = store
            .execute(&StoreCommand::AddInventoryItem(AddInventoryItem {
                item_id: InventoryItemId::new(),
                item: shoe("A"),
                occurred_at: Utc::now(),
            }))
            .unwrap();

        assert_eq!(store.version(), before + events.len() as u64);
        let noop = store
            .execute(&StoreCommand::RemoveExpense(RemoveExpense {
                expense_id: ExpenseId::new(),
                occurred_at: Utc::now(),
            }))
            .unwrap();
        assert!(noop.is_empty());
        assert_eq!(store.version(), before + events.len() as u64);
    }

    #[test]
    fn positional_removal_emits_id_based_event() {
        let mut store = RecordStore::new();
        let item = store.add_inventory_item(shoe("A")).unwrap();

        let events = store
            .handle(&StoreCommand::RemoveInventoryItemAt(RemoveInventoryItemAt {
                index: 0,
                occurred_at: Utc::now(),
            }))
            .unwrap();

        match &events[..] {
            [StoreEvent::InventoryItemRemoved(e)] => assert_eq!(e.item_id, item.id_typed()),
            other => panic!("unexpected events: {other:?}"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: version counts applied events; no-op removals never bump it.
        #[test]
        fn version_counts_only_effective_changes(
            adds in 0usize..10,
            bogus_removals in 0usize..5,
        ) {
            let mut store = RecordStore::new();
            for i in 0..adds {
                store.add_expense(gas(i as i64 * 100)).unwrap();
            }
            for _ in 0..bogus_removals {
                store.remove_expense(ExpenseId::new());
            }
            prop_assert_eq!(store.version(), adds as u64);
            prop_assert_eq!(store.expenses().len(), adds);
        }
    }
}
