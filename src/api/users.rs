//! User directory endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::error::{Result, ShopError};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let users = shop.users.all();
    Ok(Json(json!({
        "success": true,
        "data": { "users": users, "count": users.len() }
    })))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let shop = state.shop.read().await;
    let user = shop.users.get(&id).ok_or(ShopError::UserNotFound)?;
    Ok(Json(json!({ "success": true, "data": { "user": user } })))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let name = req.name.unwrap_or_default();
    let email = req.email.unwrap_or_default();

    let mut shop = state.shop.write().await;
    let user = shop.users.create(&name, &email)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": { "user": user } })),
    ))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let mut shop = state.shop.write().await;
    if !shop.users.delete(&id) {
        return Err(ShopError::UserNotFound);
    }
    Ok(Json(json!({ "success": true, "message": "User deleted" })))
}
