use axum::Router;

pub mod analytics;
pub mod calculator;
pub mod charts;
pub mod expenses;
pub mod inventory;
pub mod system;

/// Router for all record and analytics endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/expenses", expenses::router())
        .nest("/analytics", analytics::router())
        .nest("/charts", charts::router())
        .nest("/calculator", calculator::router())
}
