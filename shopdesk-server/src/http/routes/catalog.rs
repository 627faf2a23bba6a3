//! Product catalog endpoints
//!
//! The price-addressed routes act on the first product with that price.
//! `/products/{id}` addresses one product by its unique id.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::catalog::SharedCatalog;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathParam};
use crate::models::{NewProduct, Product, ProductPayload};

/// Response to a create
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub products: Vec<Product>,
}

/// Response to an update
#[derive(Serialize)]
pub struct UpdatedResponse {
    pub message: &'static str,
    pub updated_product: Product,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

const UPDATED: &str = "Product updated successfully";
const DELETED: &str = "Product deleted successfully";

/// POST /create_product - append and return the whole catalog
async fn create_product(
    State(catalog): State<SharedCatalog>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let product = NewProduct::try_from(payload)?;

    let mut catalog = catalog.write().await;
    let id = catalog.insert(product).id;
    tracing::info!(id, total = catalog.len(), "product created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Product added successfully",
            products: catalog.list().to_vec(),
        }),
    ))
}

/// GET /view_all_product
async fn list_products(State(catalog): State<SharedCatalog>) -> Json<Vec<Product>> {
    let products = catalog.read().await.list().to_vec();
    Json(products)
}

/// GET /view_product/{price}
async fn get_by_price(
    State(catalog): State<SharedCatalog>,
    PathParam(price): PathParam<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = catalog.read().await.find_by_price(price).cloned();
    product
        .map(Json)
        .ok_or_else(|| ApiError::not_found("product", price))
}

/// PUT /update_product/{price}
async fn update_by_price(
    State(catalog): State<SharedCatalog>,
    PathParam(price): PathParam<i64>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let product = NewProduct::try_from(payload)?;

    let updated = catalog
        .write()
        .await
        .update_by_price(price, product)
        .cloned()
        .ok_or_else(|| ApiError::not_found("product", price))?;
    tracing::info!(id = updated.id, price, "product updated");

    Ok(Json(UpdatedResponse {
        message: UPDATED,
        updated_product: updated,
    }))
}

/// DELETE /delete_product/{price}
async fn delete_by_price(
    State(catalog): State<SharedCatalog>,
    PathParam(price): PathParam<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = catalog
        .write()
        .await
        .remove_by_price(price)
        .ok_or_else(|| ApiError::not_found("product", price))?;
    tracing::info!(id = removed.id, price, "product deleted");

    Ok(Json(MessageResponse { message: DELETED }))
}

/// GET /products/{id}
async fn get_by_id(
    State(catalog): State<SharedCatalog>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<Product>, ApiError> {
    let product = catalog.read().await.get(id).cloned();
    product
        .map(Json)
        .ok_or_else(|| ApiError::not_found("product", id))
}

/// PUT /products/{id}
async fn update_by_id(
    State(catalog): State<SharedCatalog>,
    PathParam(id): PathParam<u64>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let product = NewProduct::try_from(payload)?;

    let updated = catalog
        .write()
        .await
        .update(id, product)
        .cloned()
        .ok_or_else(|| ApiError::not_found("product", id))?;
    tracing::info!(id, "product updated");

    Ok(Json(UpdatedResponse {
        message: UPDATED,
        updated_product: updated,
    }))
}

/// DELETE /products/{id}
async fn delete_by_id(
    State(catalog): State<SharedCatalog>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    catalog
        .write()
        .await
        .remove(id)
        .ok_or_else(|| ApiError::not_found("product", id))?;
    tracing::info!(id, "product deleted");

    Ok(Json(MessageResponse { message: DELETED }))
}

/// Catalog routes
pub fn router() -> Router<SharedCatalog> {
    Router::new()
        .route("/create_product", post(create_product))
        .route("/view_all_product", get(list_products))
        .route("/view_product/{price}", get(get_by_price))
        .route("/update_product/{price}", put(update_by_price))
        .route("/delete_product/{price}", delete(delete_by_price))
        .route(
            "/products/{id}",
            get(get_by_id).put(update_by_id).delete(delete_by_id),
        )
}
