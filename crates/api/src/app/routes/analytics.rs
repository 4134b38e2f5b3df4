use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use solestock_analytics::{
    expense_category_totals, expenses_in_month, monthly_sales, sales_summary, total_expenses,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/expenses/categories", get(expense_categories))
        .route("/sales/monthly", get(sales_by_month))
        .route("/sales/summary", get(sales_summary_view))
}

pub async fn expense_categories(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MonthQuery>,
) -> axum::response::Response {
    let month = match errors::parse_month(query.month.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let store = services.read();
    let selected = expenses_in_month(store.expenses(), month);
    let totals = expense_category_totals(selected.iter().copied());
    tracing::debug!(categories = totals.len(), month = ?month, "expense totals computed");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "month": month.map(|m| m.to_string()),
            "total": total_expenses(selected).to_dollars(),
            "categories": totals.iter().map(dto::category_total_to_json).collect::<Vec<_>>(),
        })),
    )
        .into_response()
}

pub async fn sales_by_month(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let store = services.read();
    let months: Vec<_> = monthly_sales(store.inventory())
        .iter()
        .map(dto::monthly_sales_to_json)
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "months": months }))).into_response()
}

pub async fn sales_summary_view(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MonthQuery>,
) -> axum::response::Response {
    let month = match errors::parse_month(query.month.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let store = services.read();
    let summary = sales_summary(store.inventory(), month);
    tracing::debug!(count = summary.count, month = ?month, "sales summary computed");

    (StatusCode::OK, Json(dto::summary_to_json(&summary))).into_response()
}
