use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use solestock_analytics::{
    expense_category_chart, expense_category_totals, expenses_in_month, monthly_sales,
    revenue_profit_chart,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/expenses", get(expenses_pie))
        .route("/sales", get(sales_bars))
}

pub async fn expenses_pie(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MonthQuery>,
) -> axum::response::Response {
    let month = match errors::parse_month(query.month.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let store = services.read();
    let totals = expense_category_totals(expenses_in_month(store.expenses(), month));
    (StatusCode::OK, Json(expense_category_chart(&totals))).into_response()
}

pub async fn sales_bars(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let store = services.read();
    let months = monthly_sales(store.inventory());
    (StatusCode::OK, Json(revenue_profit_chart(&months))).into_response()
}
