use chrono::NaiveDate;
use serde::Deserialize;

use solestock_analytics::{CategoryTotal, MonthGroup, MonthlySales, SalesSummary};
use solestock_core::{DomainResult, Money};
use solestock_expenses::{Expense, NewExpense};
use solestock_inventory::{InventoryItem, NewInventoryItem};

// -------------------------
// Request DTOs
// -------------------------
//
// Amounts arrive as dollars (as typed into a form) and are converted to cents.

#[derive(Debug, Deserialize)]
pub struct AddInventoryItemRequest {
    pub sku: String,
    pub shoe_name: String,
    pub size: f64,
    pub purchase_price: f64,
    pub date_bought: NaiveDate,
    pub date_sold: Option<NaiveDate>,
    pub price_sold: Option<f64>,
}

impl AddInventoryItemRequest {
    pub fn into_new_item(self) -> DomainResult<NewInventoryItem> {
        Ok(NewInventoryItem {
            sku: self.sku,
            shoe_name: self.shoe_name,
            size: self.size,
            purchase_price: Money::from_dollars(self.purchase_price)?,
            date_bought: self.date_bought,
            date_sold: self.date_sold,
            price_sold: self.price_sold.map(Money::from_dollars).transpose()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AddExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl AddExpenseRequest {
    pub fn into_new_expense(self) -> DomainResult<NewExpense> {
        Ok(NewExpense::new(
            self.description,
            Money::from_dollars(self.amount)?,
            self.date,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoiRequest {
    pub cost: Option<f64>,
    pub revenue: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ProfitRequest {
    pub cost: Option<f64>,
    pub selling_price: Option<f64>,
}

pub fn optional_dollars(value: Option<f64>) -> DomainResult<Option<Money>> {
    value.map(Money::from_dollars).transpose()
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &InventoryItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id_typed().to_string(),
        "sku": item.sku(),
        "shoe_name": item.shoe_name(),
        "size": item.size(),
        "purchase_price": item.purchase_price().to_dollars(),
        "date_bought": item.date_bought(),
        "date_sold": item.sale().map(|s| s.date_sold),
        "price_sold": item.sale().map(|s| s.price_sold.to_dollars()),
        "profit": item.profit().map(Money::to_dollars),
    })
}

pub fn expense_to_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "id": expense.id_typed().to_string(),
        "description": expense.description(),
        "amount": expense.amount().to_dollars(),
        "date": expense.date(),
    })
}

pub fn group_to_json<T>(
    group: &MonthGroup<'_, T>,
    render: impl Fn(&T) -> serde_json::Value,
) -> serde_json::Value {
    serde_json::json!({
        "month": group.month.to_string(),
        "label": group.label,
        "items": group.items.iter().map(|&i| render(i)).collect::<Vec<_>>(),
    })
}

pub fn category_total_to_json(total: &CategoryTotal) -> serde_json::Value {
    serde_json::json!({
        "category": total.category,
        "total": total.total.to_dollars(),
    })
}

pub fn monthly_sales_to_json(month: &MonthlySales) -> serde_json::Value {
    serde_json::json!({
        "month": month.month.to_string(),
        "revenue": month.revenue.to_dollars(),
        "profit": month.profit.to_dollars(),
    })
}

pub fn summary_to_json(summary: &SalesSummary) -> serde_json::Value {
    serde_json::json!({
        "count": summary.count,
        "total_sales": summary.total_sales.to_dollars(),
        "total_profit": summary.total_profit.to_dollars(),
        "total_cost": summary.total_cost.to_dollars(),
        "roi": summary.roi,
        "avg_profit": summary.avg_profit.to_dollars(),
    })
}
