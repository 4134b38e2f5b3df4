//! Month buckets for list views (inventory by purchase month, expenses by date).

use std::collections::BTreeMap;

use serde::Serialize;

use solestock_expenses::Expense;
use solestock_inventory::InventoryItem;

use crate::filter::{expense_month, purchase_month};
use crate::month::MonthKey;

/// Records that share a month, in their original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup<'a, T> {
    pub month: MonthKey,
    /// Heading text, e.g. `April 2024`.
    pub label: String,
    pub items: Vec<&'a T>,
}

/// Bucket records by month, oldest month first. Records without a key are skipped.
pub fn group_by_month<'a, T, I, F>(items: I, key: F) -> Vec<MonthGroup<'a, T>>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Option<MonthKey>,
{
    let mut buckets: BTreeMap<MonthKey, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        if let Some(month) = key(item) {
            buckets.entry(month).or_default().push(item);
        }
    }

    buckets
        .into_iter()
        .map(|(month, items)| MonthGroup {
            month,
            label: month.label(),
            items,
        })
        .collect()
}

/// All items, sold or not, bucketed by the month they were bought.
pub fn group_by_purchase_month(inventory: &[InventoryItem]) -> Vec<MonthGroup<'_, InventoryItem>> {
    group_by_month(inventory, purchase_month)
}

pub fn group_expenses_by_month(expenses: &[Expense]) -> Vec<MonthGroup<'_, Expense>> {
    group_by_month(expenses, expense_month)
}
