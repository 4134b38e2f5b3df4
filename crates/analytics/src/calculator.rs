//! Standalone ROI and profit calculators.
//!
//! Both take optional inputs as they arrive from a form and reject missing
//! values up front instead of producing `NaN`.

use solestock_core::{DomainError, DomainResult, Money};

fn required(value: Option<Money>, field: &str) -> DomainResult<Money> {
    let value = value.ok_or_else(|| DomainError::validation(format!("{field} is required")))?;
    if value.is_negative() {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    Ok(value)
}

/// `(revenue - cost) / cost * 100`.
pub fn roi(cost: Option<Money>, revenue: Option<Money>) -> DomainResult<f64> {
    let cost = required(cost, "buy cost")?;
    let revenue = required(revenue, "revenue")?;
    if cost.is_zero() {
        return Err(DomainError::validation("buy cost must be greater than zero"));
    }
    Ok((revenue - cost).percent_of(cost))
}

/// `selling_price - cost`.
pub fn profit(cost: Option<Money>, selling_price: Option<Money>) -> DomainResult<Money> {
    let cost = required(cost, "buy cost")?;
    let selling_price = required(selling_price, "selling price")?;
    Ok(selling_price - cost)
}
