use axum::{
    extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, routing::post,
    Json, Router,
};

use solestock_analytics::{profit, roi};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/roi", post(calculate_roi))
        .route("/profit", post(calculate_profit))
}

pub async fn calculate_roi(
    body: Result<Json<dto::RoiRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let result = dto::optional_dollars(body.cost).and_then(|cost| {
        let revenue = dto::optional_dollars(body.revenue)?;
        roi(cost, revenue)
    });

    match result {
        Ok(roi) => (StatusCode::OK, Json(serde_json::json!({ "roi": roi }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "roi calculation rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn calculate_profit(
    body: Result<Json<dto::ProfitRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let result = dto::optional_dollars(body.cost).and_then(|cost| {
        let selling_price = dto::optional_dollars(body.selling_price)?;
        profit(cost, selling_price)
    });

    match result {
        Ok(profit) => (
            StatusCode::OK,
            Json(serde_json::json!({ "profit": profit.to_dollars() })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "profit calculation rejected");
            errors::domain_error_to_response(e)
        }
    }
}
