//! Expense totals per category.

use std::collections::HashMap;

use serde::Serialize;

use solestock_core::Money;
use solestock_expenses::Expense;

/// Sum of expense amounts for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Group expenses by category and sum the amounts.
///
/// Categories appear in the order they are first seen.
pub fn expense_category_totals<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for expense in expenses {
        let category = expense.category();
        match index.get(category) {
            Some(&pos) => totals[pos].total += expense.amount(),
            None => {
                index.insert(category, totals.len());
                totals.push(CategoryTotal {
                    category: category.to_string(),
                    total: expense.amount(),
                });
            }
        }
    }

    totals
}

pub fn total_expenses<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(Expense::amount).sum()
}
