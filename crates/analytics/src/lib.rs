//! Derived metrics over the record collections.
//!
//! Everything here is a pure function of its inputs: callers pass the full
//! collection (and an optional month selection) and get a freshly computed
//! view back. Nothing is cached between calls.
//!
//! - `month`: calendar-month keys and labels
//! - `filter`: restrict a collection to one month
//! - `expenses` / `sales`: group-by and reduce
//! - `grouping`: month buckets for list views
//! - `chart`: label/series shapes for a charting surface
//! - `calculator`: standalone ROI/profit calculators

pub mod calculator;
pub mod chart;
pub mod expenses;
pub mod filter;
pub mod grouping;
pub mod month;
pub mod sales;

pub use calculator::{profit, roi};
pub use chart::{ChartData, Colors, Dataset, expense_category_chart, revenue_profit_chart};
pub use expenses::{CategoryTotal, expense_category_totals, total_expenses};
pub use filter::{
    bought_in_month, expense_month, expenses_in_month, filter_by_month, purchase_month,
    sale_month, sold_in_month,
};
pub use grouping::{MonthGroup, group_by_month, group_by_purchase_month, group_expenses_by_month};
pub use month::MonthKey;
pub use sales::{MonthlySales, SalesSummary, monthly_sales, sales_summary};
