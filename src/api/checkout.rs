//! Checkout and order lookup endpoints.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{caller_id, AppState};
use crate::error::{Result, ShopError};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub discount_code: Option<String>,
}

pub async fn checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<CheckoutRequest>>,
) -> Result<Json<Value>> {
    let user_id = caller_id(&headers);
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let mut shop = state.shop.write().await;
    let order = shop.checkout(&user_id, req.discount_code.as_deref())?;
    Ok(Json(json!({
        "success": true,
        "message": "Order placed successfully",
        "data": { "order": order }
    })))
}

pub async fn get_orders(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let user_id = caller_id(&headers);
    let shop = state.shop.read().await;
    let orders = shop.orders.by_user(&user_id);
    Ok(Json(json!({
        "success": true,
        "data": { "orders": orders, "count": orders.len() }
    })))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let order = shop.orders.by_id(&order_id).ok_or(ShopError::OrderNotFound)?;
    Ok(Json(json!({ "success": true, "data": { "order": order } })))
}
