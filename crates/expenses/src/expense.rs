use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use solestock_core::{DomainError, DomainResult, Entity, ExpenseId, Money};

/// Categories offered by the expense form. Any other description is accepted
/// and becomes its own category.
pub const SUGGESTED_CATEGORIES: [&str; 6] = [
    "Office Supplies",
    "Gas",
    "Shipping Fees",
    "Subscriptions",
    "Education",
    "Other",
];

/// A logged expense. The description doubles as the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Money,
    date: NaiveDate,
}

impl Expense {
    pub fn id_typed(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Grouping key for category totals.
    pub fn category(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Entity for Expense {
    type Id = ExpenseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for logging an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if self.amount.is_negative() {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        Ok(())
    }

    /// Validate and assign an identity. Surrounding whitespace is trimmed from
    /// the description so " Gas" and "Gas" land in one category.
    pub fn into_expense(self, id: ExpenseId) -> DomainResult<Expense> {
        self.validate()?;
        Ok(Expense {
            id,
            description: self.description.trim().to_string(),
            amount: self.amount,
            date: self.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn into_expense_trims_description() {
        let expense = NewExpense::new("  Gas ", Money::from_cents(2_000), jan(3))
            .into_expense(ExpenseId::new())
            .unwrap();
        assert_eq!(expense.category(), "Gas");
        assert_eq!(expense.amount(), Money::from_cents(2_000));
    }

    #[test]
    fn empty_description_is_rejected() {
        let err = NewExpense::new("   ", Money::from_cents(100), jan(3))
            .into_expense(ExpenseId::new())
            .unwrap_err();
        assert_eq!(err, DomainError::validation("description cannot be empty"));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let new = NewExpense::new("Gas", Money::from_cents(-1), jan(3));
        assert!(matches!(new.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn free_form_categories_are_accepted() {
        assert!(!SUGGESTED_CATEGORIES.contains(&"Storage Unit"));
        let new = NewExpense::new("Storage Unit", Money::from_cents(5_000), jan(9));
        assert!(new.validate().is_ok());
    }

    #[test]
    fn expense_serializes_with_id_and_iso_date() {
        let expense = NewExpense::new("Gas", Money::from_cents(1_500), jan(20))
            .into_expense(ExpenseId::new())
            .unwrap();
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["date"], "2024-01-20");
        assert_eq!(value["amount"], 1_500);
        assert_eq!(value["id"], expense.id().to_string());
    }
}
