//! Admin endpoints: analytics, manual discount minting, store listings.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::error::Result;

pub async fn analytics(State(state): State<AppState>) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let codes = shop.discounts.all();
    Ok(Json(json!({
        "success": true,
        "data": {
            "totalItemsPurchased": shop.orders.total_items_purchased(),
            "totalPurchaseAmount": shop.orders.total_purchase_amount(),
            "totalDiscountAmount": shop.orders.total_discount_amount(),
            "orderCount": shop.orders.order_count(),
            "discountCodes": {
                "total": codes.len(),
                "used": shop.discounts.used_count(),
                "available": shop.discounts.available_count(),
                "codes": codes,
            },
            "nextDiscountAt": shop.next_discount_in(),
        }
    })))
}

/// Manual mint, allowed only when the order count sits exactly on the
/// configured interval.
pub async fn generate_discount_code(State(state): State<AppState>) -> impl IntoResponse {
    let mut shop = state.shop.write().await;
    let interval = shop.config.discount_interval;
    let order_count = shop.orders.order_count();

    if order_count % interval != 0 {
        let next_at = (order_count / interval + 1) * interval;
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": format!(
                    "Discount codes are generated every {interval} orders. Next discount at order {next_at}"
                ),
            })),
        );
    }

    let code = shop.discounts.generate(order_count);
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Discount code generated successfully",
            "data": { "discountCode": code }
        })),
    )
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let products = shop.catalog.all();
    Ok(Json(json!({
        "success": true,
        "data": { "products": products, "count": products.len() }
    })))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let orders = shop.orders.all();
    Ok(Json(json!({
        "success": true,
        "data": { "orders": orders, "count": orders.len() }
    })))
}
