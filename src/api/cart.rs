//! Cart endpoints.
//!
//! The caller is identified by the `user-id` header; a missing header maps
//! to the shared `default-user` cart.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{caller_id, AppState};
use crate::domain::Cart;
use crate::error::{Result, ShopError};
use crate::store::Shop;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: Option<i64>,
}

fn cart_body(message: &str, cart: &Cart) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": message,
        "data": { "cart": cart, "total": cart.total() }
    }))
}

pub async fn get_cart(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let user_id = caller_id(&headers);
    let mut shop = state.shop.write().await;
    let cart = shop.carts.get_or_create(&user_id).clone();
    Ok(Json(json!({
        "success": true,
        "data": {
            "cart": cart,
            "total": cart.total(),
            "itemCount": cart.item_count(),
        }
    })))
}

pub async fn add_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<Value>> {
    let user_id = caller_id(&headers);
    let (product_id, quantity) = match (req.product_id, req.quantity) {
        (Some(p), Some(q)) if !p.is_empty() && q > 0 => (p, q),
        _ => {
            return Err(ShopError::InvalidInput(
                "Product ID and valid quantity are required".into(),
            ))
        }
    };
    let quantity = u32::try_from(quantity)
        .map_err(|_| ShopError::InvalidInput("Quantity out of range".into()))?;

    let mut shop = state.shop.write().await;
    let Shop { catalog, carts, .. } = &mut *shop;
    let cart = carts.add_item(catalog, &user_id, &product_id, quantity)?;
    Ok(cart_body("Item added to cart", &cart))
}

pub async fn update_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<Value>> {
    let user_id = caller_id(&headers);
    let quantity = req
        .quantity
        .ok_or_else(|| ShopError::InvalidInput("Quantity is required".into()))?;

    let mut shop = state.shop.write().await;
    let Shop { catalog, carts, .. } = &mut *shop;
    let cart = carts.update_quantity(catalog, &user_id, &product_id, quantity)?;
    Ok(cart_body("Cart updated successfully", &cart))
}

pub async fn remove_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> Result<Json<Value>> {
    let user_id = caller_id(&headers);
    let mut shop = state.shop.write().await;
    let cart = shop.carts.remove_item(&user_id, &product_id);
    Ok(cart_body("Item removed from cart", &cart))
}

pub async fn clear_cart(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let user_id = caller_id(&headers);
    let mut shop = state.shop.write().await;
    shop.carts.clear(&user_id);
    Ok(Json(json!({ "success": true, "message": "Cart cleared" })))
}
