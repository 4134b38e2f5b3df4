//! Chart-ready shapes (labels + datasets) for a charting surface.
//!
//! Amounts are converted to dollars here; the shapes serialise in camelCase the
//! way chart.js expects `data` objects.

use serde::Serialize;

use crate::expenses::CategoryTotal;
use crate::sales::MonthlySales;

/// RGB triples cycled over pie slices.
const PALETTE: [(u8, u8, u8); 6] = [
    (255, 99, 132),
    (54, 162, 235),
    (255, 206, 86),
    (75, 192, 192),
    (153, 102, 255),
    (255, 159, 64),
];

const REVENUE_RGB: (u8, u8, u8) = (75, 192, 192);
const PROFIT_RGB: (u8, u8, u8) = (153, 102, 255);

const FILL_ALPHA: f32 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Colors,
    pub border_color: Colors,
    pub border_width: u32,
}

/// One colour for the whole dataset, or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

fn solid(rgb: (u8, u8, u8), label: &str, data: Vec<f64>) -> Dataset {
    Dataset {
        label: label.to_string(),
        data,
        background_color: Colors::Single(rgba(rgb, FILL_ALPHA)),
        border_color: Colors::Single(rgba(rgb, 1.0)),
        border_width: 1,
    }
}

/// Proportional (pie) chart of expense totals per category.
pub fn expense_category_chart(totals: &[CategoryTotal]) -> ChartData {
    let palette = PALETTE.iter().cycle().take(totals.len());
    let (fill, border): (Vec<String>, Vec<String>) = palette
        .map(|rgb| (rgba(*rgb, FILL_ALPHA), rgba(*rgb, 1.0)))
        .unzip();

    ChartData {
        labels: totals.iter().map(|t| t.category.clone()).collect(),
        datasets: vec![Dataset {
            label: "Expenses ($)".to_string(),
            data: totals.iter().map(|t| t.total.to_dollars()).collect(),
            background_color: Colors::PerPoint(fill),
            border_color: Colors::PerPoint(border),
            border_width: 1,
        }],
    }
}

/// Bar chart of revenue and profit per month.
pub fn revenue_profit_chart(months: &[MonthlySales]) -> ChartData {
    ChartData {
        labels: months.iter().map(|m| m.month.to_string()).collect(),
        datasets: vec![
            solid(
                REVENUE_RGB,
                "Revenue ($)",
                months.iter().map(|m| m.revenue.to_dollars()).collect(),
            ),
            solid(
                PROFIT_RGB,
                "Profit ($)",
                months.iter().map(|m| m.profit.to_dollars()).collect(),
            ),
        ],
    }
}
