use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Redirect,
    Json,
};
use tracing::info;

use super::error::ApiError;
use super::extract::{ProductIdParam, ValidJson};
use super::{AppState, GREETING};
use crate::model::{Product, ProductCreate, ProductUpdate};
use actor_framework::ActorClient;

pub async fn greet() -> Json<&'static str> {
    Json(GREETING)
}

/// `/products` without the trailing slash; 307 keeps the method and body.
pub async fn redirect_to_collection(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::temporary(&format!("/products/?{query}")),
        None => Redirect::temporary("/products/"),
    }
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    ProductIdParam(id): ProductIdParam,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.find(id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProductCreate>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.products.create_product(payload).await?;
    info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Full replacement: a description left out of the body is cleared.
pub async fn replace_product(
    State(state): State<AppState>,
    ProductIdParam(id): ProductIdParam,
    ValidJson(payload): ValidJson<ProductCreate>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.replace_product(id, payload).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    ProductIdParam(id): ProductIdParam,
    ValidJson(update): ValidJson<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.update_product(id, update).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductIdParam(id): ProductIdParam,
) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
