//! Revenue, profit and ROI over sold inventory.

use std::collections::BTreeMap;

use serde::Serialize;

use solestock_core::Money;
use solestock_inventory::InventoryItem;

use crate::filter::{filter_by_month, sale_month};
use crate::month::MonthKey;

/// Revenue and profit for one sale month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySales {
    pub month: MonthKey,
    pub revenue: Money,
    pub profit: Money,
}

/// Headline numbers over sold items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesSummary {
    pub count: usize,
    pub total_sales: Money,
    pub total_profit: Money,
    pub total_cost: Money,
    /// `total_profit / total_cost * 100`; 0 when nothing was spent.
    pub roi: f64,
    /// `total_profit / count`, to the nearest cent; 0 when nothing sold.
    pub avg_profit: Money,
}

impl Default for SalesSummary {
    fn default() -> Self {
        Self {
            count: 0,
            total_sales: Money::ZERO,
            total_profit: Money::ZERO,
            total_cost: Money::ZERO,
            roi: 0.0,
            avg_profit: Money::ZERO,
        }
    }
}

/// Revenue/profit per sale month, oldest month first. Unsold items are skipped.
pub fn monthly_sales<'a, I>(inventory: I) -> Vec<MonthlySales>
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let mut by_month: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();

    for item in inventory {
        let Some(sale) = item.sale() else { continue };
        let entry = by_month
            .entry(MonthKey::of(sale.date_sold))
            .or_insert((Money::ZERO, Money::ZERO));
        entry.0 += sale.price_sold;
        entry.1 += sale.price_sold - item.purchase_price();
    }

    by_month
        .into_iter()
        .map(|(month, (revenue, profit))| MonthlySales {
            month,
            revenue,
            profit,
        })
        .collect()
}

/// Summary over sold items, optionally only those sold in `month`.
pub fn sales_summary<'a, I>(inventory: I, month: Option<MonthKey>) -> SalesSummary
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let mut summary = SalesSummary::default();

    for item in filter_by_month(inventory, month, sale_month) {
        let Some(sale) = item.sale() else { continue };
        summary.count += 1;
        summary.total_sales += sale.price_sold;
        summary.total_cost += item.purchase_price();
    }

    summary.total_profit = summary.total_sales - summary.total_cost;
    summary.roi = summary.total_profit.percent_of(summary.total_cost);
    summary.avg_profit = summary.total_profit.split_even(summary.count);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use solestock_core::InventoryItemId;
    use solestock_inventory::NewInventoryItem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dollars(d: i64) -> Money {
        Money::from_cents(d * 100)
    }

    fn unsold(cost: i64) -> InventoryItem {
        NewInventoryItem::new("SKU", "New Balance 550", 10.0, dollars(cost), date(2023, 12, 1))
            .into_item(InventoryItemId::new())
            .unwrap()
    }

    fn sold(cost: i64, on: NaiveDate, price: i64) -> InventoryItem {
        NewInventoryItem::new("SKU", "New Balance 550", 10.0, dollars(cost), date(2023, 12, 1))
            .sold(on, dollars(price))
            .into_item(InventoryItemId::new())
            .unwrap()
    }

    #[test]
    fn two_january_sales_scenario() {
        let inventory = vec![
            sold(50, date(2024, 1, 10), 80),
            sold(30, date(2024, 1, 20), 45),
        ];

        let summary = sales_summary(&inventory, None);
        assert_eq!(
            summary,
            SalesSummary {
                count: 2,
                total_sales: dollars(125),
                total_profit: dollars(45),
                total_cost: dollars(80),
                roi: 56.25,
                avg_profit: Money::from_cents(2_250),
            }
        );
    }

    #[test]
    fn empty_inventory_has_zero_ratios() {
        let summary = sales_summary(&Vec::<InventoryItem>::new(), None);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.roi, 0.0);
        assert_eq!(summary.avg_profit, Money::ZERO);
    }

    #[test]
    fn zero_cost_sales_have_zero_roi() {
        let inventory = vec![sold(0, date(2024, 1, 10), 40)];
        let summary = sales_summary(&inventory, None);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.roi, 0.0);
        assert!(summary.roi.is_finite());
        assert_eq!(summary.avg_profit, dollars(40));
    }

    #[test]
    fn unsold_items_are_excluded_from_summary() {
        let inventory = vec![unsold(200), sold(100, date(2024, 2, 1), 150)];
        let summary = sales_summary(&inventory, None);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.total_cost, dollars(100));
        assert_eq!(summary.roi, 50.0);
    }

    #[test]
    fn summary_month_filter_uses_sale_month() {
        let inventory = vec![
            sold(50, date(2024, 1, 10), 80),
            sold(30, date(2024, 2, 20), 45),
        ];
        let feb = MonthKey::new(2024, 2).ok();
        let summary = sales_summary(&inventory, feb);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.total_sales, dollars(45));
        assert_eq!(summary.total_profit, dollars(15));
    }

    #[test]
    fn monthly_sales_excludes_unsold_items() {
        let inventory = vec![unsold(10), unsold(20)];
        assert!(monthly_sales(&inventory).is_empty());
    }

    #[test]
    fn monthly_sales_accumulates_per_month_in_chronological_order() {
        let inventory = vec![
            sold(100, date(2024, 10, 3), 160),
            sold(50, date(2024, 2, 14), 80),
            sold(30, date(2024, 2, 20), 20),
            unsold(999),
        ];

        let months = monthly_sales(&inventory);
        assert_eq!(
            months,
            vec![
                MonthlySales {
                    month: MonthKey::new(2024, 2).unwrap(),
                    revenue: dollars(100),
                    profit: dollars(20),
                },
                MonthlySales {
                    month: MonthKey::new(2024, 10).unwrap(),
                    revenue: dollars(160),
                    profit: dollars(60),
                },
            ]
        );
    }

    #[test]
    fn summary_accepts_prefiltered_references() {
        let inventory = vec![sold(50, date(2024, 1, 10), 80), unsold(10)];
        let only_sold: Vec<&InventoryItem> = inventory.iter().filter(|i| i.is_sold()).collect();
        assert_eq!(sales_summary(only_sold, None).count, 1);
    }
}
