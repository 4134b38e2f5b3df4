use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use solestock_analytics::{expenses_in_month, group_expenses_by_month};
use solestock_core::ExpenseId;
use solestock_expenses::SUGGESTED_CATEGORIES;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_expenses).post(add_expense))
        .route("/categories", get(list_categories))
        .route("/by-month", get(by_month))
        .route("/:id", delete(remove_expense))
}

pub async fn list_expenses(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MonthQuery>,
) -> axum::response::Response {
    let month = match errors::parse_month(query.month.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let store = services.read();
    let expenses: Vec<_> = expenses_in_month(store.expenses(), month)
        .into_iter()
        .map(dto::expense_to_json)
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "expenses": expenses }))).into_response()
}

pub async fn add_expense(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddExpenseRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let new_expense = match body.into_new_expense() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let added = services.write().add_expense(new_expense);
    match added {
        Ok(expense) => {
            tracing::info!(
                expense_id = %expense.id_typed(),
                category = expense.category(),
                "expense added"
            );
            (StatusCode::CREATED, Json(dto::expense_to_json(&expense))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Unknown ids are ignored; the response is the same either way.
pub async fn remove_expense(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let expense_id: ExpenseId = match errors::parse_id(&id, "expense") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    if services.write().remove_expense(expense_id) {
        tracing::info!(%expense_id, "expense removed");
    } else {
        tracing::debug!(%expense_id, "remove ignored: no such expense");
    }
    StatusCode::NO_CONTENT.into_response()
}

pub async fn list_categories() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "categories": SUGGESTED_CATEGORIES })),
    )
        .into_response()
}

pub async fn by_month(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let store = services.read();
    let groups: Vec<_> = group_expenses_by_month(store.expenses())
        .iter()
        .map(|g| dto::group_to_json(g, dto::expense_to_json))
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "groups": groups }))).into_response()
}
