//! Static and computed informational endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathParam};
use crate::models::{NewProduct, ProductPayload};

/// Computed service value
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ServiceValue {
    pub original_id: i64,
    pub calculated_value: i64,
}

/// `id * 2 + 10`, or `None` on overflow
pub fn service_value(id: i64) -> Option<i64> {
    id.checked_mul(2)?.checked_add(10)
}

/// GET /
async fn home() -> Json<Value> {
    Json(json!({ "message": "Welcome to the shopdesk catalog API!" }))
}

/// GET /product
async fn product_info() -> Json<Value> {
    Json(json!({ "data": "currently you are in product data" }))
}

/// POST /product - validate and acknowledge, nothing is stored
async fn receive_product(
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<Json<Value>, ApiError> {
    let product = NewProduct::try_from(payload)?;
    Ok(Json(json!({
        "message": format!("Product '{}' received successfully", product.name())
    })))
}

/// GET /services
async fn services_info() -> Json<Value> {
    Json(json!({ "data": "currently you are in services data" }))
}

/// GET /services/{id}
async fn service_by_id(PathParam(id): PathParam<i64>) -> Result<Json<ServiceValue>, ApiError> {
    let calculated_value = service_value(id)
        .ok_or_else(|| ApiError::bad_request(format!("service id {} is out of range", id)))?;

    Ok(Json(ServiceValue {
        original_id: id,
        calculated_value,
    }))
}

/// GET /bonus/{basesalary}/{bonus}
async fn bonus(
    PathParam((base_salary, bonus)): PathParam<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let total = base_salary
        .checked_add(bonus)
        .ok_or_else(|| ApiError::bad_request("salary plus bonus is out of range"))?;

    Ok(Json(json!({ "data": total })))
}

/// Informational routes; no state needed
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/product", get(product_info).post(receive_product))
        .route("/services", get(services_info))
        .route("/services/{id}", get(service_by_id))
        .route("/bonus/{basesalary}/{bonus}", get(bonus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_value_doubles_and_adds_ten() {
        assert_eq!(service_value(5), Some(20));
        assert_eq!(service_value(0), Some(10));
        assert_eq!(service_value(-5), Some(0));
    }

    #[test]
    fn service_value_overflow() {
        assert_eq!(service_value(i64::MAX), None);
        assert_eq!(service_value(i64::MAX / 2), None);
    }
}
