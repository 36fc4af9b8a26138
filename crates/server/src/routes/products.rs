use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::product::Product;
use tracing::info;

use crate::{errors::ApiError, startup::ServerState};

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_product(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Product>, ApiError> {
    match state.products.get_product_by_id(id).await? {
        Some(p) => Ok(Json(p)),
        None => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn list_products(State(state): State<ServerState>) -> Result<Json<Vec<Product>>, ApiError> {
    let list = state.products.get_all_products().await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProductDoc),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn create_product(State(state): State<ServerState>, Json(input): Json<Product>) -> Result<Json<Product>, ApiError> {
    let created = state.products.create_product(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = crate::openapi::ProductDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn update_product(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<Product>,
) -> Result<Json<Product>, ApiError> {
    let updated = state.products.update_product(id, input).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn delete_product(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.products.delete_product(id).await?;
    Ok(StatusCode::OK)
}
