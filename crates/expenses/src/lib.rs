//! Business expenses, categorised by description.

pub mod expense;

pub use expense::{Expense, NewExpense, SUGGESTED_CATEGORIES};
