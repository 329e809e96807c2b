//! Product browsing endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::error::{Result, ShopError};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let products = shop.catalog.all();
    Ok(Json(json!({
        "success": true,
        "data": { "products": products, "count": products.len() }
    })))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let product = shop.catalog.get(&id).ok_or(ShopError::ProductNotFound)?;
    Ok(Json(json!({ "success": true, "data": { "product": product } })))
}
