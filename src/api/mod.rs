//! HTTP layer: router, shared state, and request handlers.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod products;
pub mod users;

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Shop;

/// Sentinel identity used when the caller sends no `user-id` header.
pub const DEFAULT_USER: &str = "default-user";

#[derive(Clone)]
pub struct AppState {
    pub shop: Arc<RwLock<Shop>>,
}

impl AppState {
    pub fn new(shop: Shop) -> Self {
        Self {
            shop: Arc::new(RwLock::new(shop)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/products", get(products::list_products))
        .route("/api/products/:id", get(products::get_product))
        .route(
            "/api/cart",
            get(cart::get_cart).delete(cart::clear_cart),
        )
        .route("/api/cart/items", post(cart::add_item))
        .route(
            "/api/cart/items/:product_id",
            axum::routing::put(cart::update_item).delete(cart::remove_item),
        )
        .route("/api/checkout", post(checkout::checkout))
        .route("/api/checkout/orders", get(checkout::get_orders))
        .route("/api/checkout/orders/:order_id", get(checkout::get_order))
        .route("/api/admin/analytics", get(admin::analytics))
        .route("/api/admin/discount-code", post(admin::generate_discount_code))
        .route("/api/admin/products", get(admin::list_products))
        .route("/api/admin/orders", get(admin::list_orders))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user).delete(users::delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "API is running",
        "endpoints": {
            "health": "/api/health",
            "products": "/api/products",
            "cart": "/api/cart",
            "checkout": "/api/checkout",
        }
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Caller identity from the `user-id` header, falling back to the sentinel.
pub(crate) fn caller_id(headers: &HeaderMap) -> String {
    headers
        .get("user-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_USER)
        .to_string()
}
