//! Month selection over record collections.
//!
//! The same filter serves every view; only the key derivation differs
//! (expense date, sale date or purchase date).

use solestock_expenses::Expense;
use solestock_inventory::InventoryItem;

use crate::month::MonthKey;

/// Keep records whose month key equals `month`; keep everything when `month`
/// is `None`. Records without a key are dropped when a month is selected.
pub fn filter_by_month<'a, T, I, F>(items: I, month: Option<MonthKey>, key: F) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Option<MonthKey>,
{
    match month {
        None => items.into_iter().collect(),
        Some(month) => items
            .into_iter()
            .filter(|item| key(item) == Some(month))
            .collect(),
    }
}

pub fn expense_month(expense: &Expense) -> Option<MonthKey> {
    Some(MonthKey::of(expense.date()))
}

/// Month of the sale; `None` for unsold items.
pub fn sale_month(item: &InventoryItem) -> Option<MonthKey> {
    item.sale().map(|sale| MonthKey::of(sale.date_sold))
}

pub fn purchase_month(item: &InventoryItem) -> Option<MonthKey> {
    Some(MonthKey::of(item.date_bought()))
}

pub fn expenses_in_month(expenses: &[Expense], month: Option<MonthKey>) -> Vec<&Expense> {
    filter_by_month(expenses, month, expense_month)
}

pub fn sold_in_month(inventory: &[InventoryItem], month: Option<MonthKey>) -> Vec<&InventoryItem> {
    filter_by_month(inventory, month, sale_month)
}

pub fn bought_in_month(
    inventory: &[InventoryItem],
    month: Option<MonthKey>,
) -> Vec<&InventoryItem> {
    filter_by_month(inventory, month, purchase_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use solestock_core::{ExpenseId, InventoryItemId, Money};
    use solestock_expenses::NewExpense;
    use solestock_inventory::NewInventoryItem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(description: &str, on: NaiveDate) -> Expense {
        NewExpense::new(description, Money::from_cents(1_000), on)
            .into_expense(ExpenseId::new())
            .unwrap()
    }

    fn item(bought: NaiveDate, sold: Option<NaiveDate>) -> InventoryItem {
        let new = NewInventoryItem::new("SKU", "Samba OG", 8.5, Money::from_cents(9_000), bought);
        let new = match sold {
            Some(on) => new.sold(on, Money::from_cents(12_000)),
            None => new,
        };
        new.into_item(InventoryItemId::new()).unwrap()
    }

    #[test]
    fn no_month_returns_everything() {
        let expenses = vec![expense("Gas", date(2024, 1, 2)), expense("Gas", date(2024, 2, 2))];
        assert_eq!(expenses_in_month(&expenses, None).len(), 2);
    }

    #[test]
    fn month_keeps_only_matching_expenses() {
        let expenses = vec![
            expense("Gas", date(2024, 1, 2)),
            expense("Education", date(2024, 2, 2)),
            expense("Other", date(2024, 1, 31)),
        ];
        let jan = MonthKey::new(2024, 1).ok();
        let picked: Vec<_> = expenses_in_month(&expenses, jan)
            .into_iter()
            .map(|e| e.description())
            .collect();
        assert_eq!(picked, vec!["Gas", "Other"]);
    }

    #[test]
    fn sale_month_filter_drops_unsold_items() {
        let inventory = vec![
            item(date(2024, 1, 1), Some(date(2024, 3, 5))),
            item(date(2024, 3, 1), None),
        ];
        let march = MonthKey::new(2024, 3).ok();
        assert_eq!(sold_in_month(&inventory, march).len(), 1);
        assert_eq!(bought_in_month(&inventory, march).len(), 1);
        assert_eq!(sold_in_month(&inventory, None).len(), 2);
    }
}
