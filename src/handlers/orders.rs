use actix_web::{web, HttpResponse};

use crate::domain::order::{Order, OrderPayload};
use crate::errors::AppError;
use crate::OrderApi;

use super::{Body, Data};

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = [Order]),
    ),
    tag = "orders"
)]
pub async fn list_orders(api: web::Data<OrderApi>) -> Result<HttpResponse, AppError> {
    let orders = api.list()?;
    Ok(HttpResponse::Ok().json(Data { data: orders }))
}

/// POST /orders
///
/// Creates an order with no status; any status in the body is ignored.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderPayload,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Missing field or invalid dish quantity"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    api: web::Data<OrderApi>,
    body: web::Json<Body<OrderPayload>>,
) -> Result<HttpResponse, AppError> {
    let order = api.create(body.into_inner().data)?;
    Ok(HttpResponse::Created().json(Data { data: order }))
}

/// GET /orders/{orderId}
#[utoipa::path(
    get,
    path = "/orders/{orderId}",
    params(("orderId" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order id not found"),
    ),
    tag = "orders"
)]
pub async fn read_order(
    api: web::Data<OrderApi>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = api.read(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(Data { data: order }))
}

/// PUT /orders/{orderId}
///
/// Overwrites deliverTo, mobileNumber, status and dishes. A delivered order
/// rejects every update.
#[utoipa::path(
    put,
    path = "/orders/{orderId}",
    params(("orderId" = String, Path, description = "Order id")),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, description = "Missing field, invalid quantity, invalid status or id mismatch"),
        (status = 404, description = "Order id not found"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    api: web::Data<OrderApi>,
    path: web::Path<String>,
    body: web::Json<Body<OrderPayload>>,
) -> Result<HttpResponse, AppError> {
    let order = api.update(&path.into_inner(), body.into_inner().data)?;
    Ok(HttpResponse::Ok().json(Data { data: order }))
}

/// DELETE /orders/{orderId}
///
/// Removes the order; only pending (or never-statused) orders may go.
#[utoipa::path(
    delete,
    path = "/orders/{orderId}",
    params(("orderId" = String, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Order is not pending"),
        (status = 404, description = "Order id not found"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    api: web::Data<OrderApi>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    api.delete(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
