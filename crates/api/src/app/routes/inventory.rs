use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use solestock_analytics::{bought_in_month, group_by_purchase_month};
use solestock_core::InventoryItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(add_item))
        .route("/by-purchase-month", get(by_purchase_month))
        .route("/:id", get(get_item).delete(remove_item))
}

/// Items in insertion order, optionally only those bought in `?month=`.
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MonthQuery>,
) -> axum::response::Response {
    let month = match errors::parse_month(query.month.as_deref()) {
        Ok(m) => m,
        Err(resp) => return resp,
    };

    let store = services.read();
    let items: Vec<_> = bought_in_month(store.inventory(), month)
        .into_iter()
        .map(dto::item_to_json)
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddInventoryItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let new_item = match body.into_new_item() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let added = services.write().add_inventory_item(new_item);
    match added {
        Ok(item) => {
            tracing::info!(item_id = %item.id_typed(), sku = item.sku(), "inventory item added");
            (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let item_id: InventoryItemId = match errors::parse_id(&id, "item") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let store = services.read();
    match store.inventory_item(item_id) {
        Some(item) => (StatusCode::OK, Json(dto::item_to_json(item))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
    }
}

/// Unknown ids are ignored; the response is the same either way.
pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let item_id: InventoryItemId = match errors::parse_id(&id, "item") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    if services.write().remove_inventory_item(item_id) {
        tracing::info!(%item_id, "inventory item removed");
    } else {
        tracing::debug!(%item_id, "remove ignored: no such item");
    }
    StatusCode::NO_CONTENT.into_response()
}

pub async fn by_purchase_month(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let store = services.read();
    let groups: Vec<_> = group_by_purchase_month(store.inventory())
        .iter()
        .map(|g| dto::group_to_json(g, dto::item_to_json))
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "groups": groups }))).into_response()
}
