use actix_web::{web, HttpResponse};

use crate::domain::dish::{Dish, DishPayload};
use crate::errors::AppError;
use crate::DishApi;

use super::{Body, Data};

/// GET /dishes
///
/// Returns every dish in insertion order, wrapped as `{ "data": [...] }`.
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes", body = [Dish]),
    ),
    tag = "dishes"
)]
pub async fn list_dishes(api: web::Data<DishApi>) -> Result<HttpResponse, AppError> {
    let dishes = api.list()?;
    Ok(HttpResponse::Ok().json(Data { data: dishes }))
}

/// POST /dishes
#[utoipa::path(
    post,
    path = "/dishes",
    request_body = DishPayload,
    responses(
        (status = 201, description = "Dish created", body = Dish),
        (status = 400, description = "Missing field or invalid price"),
    ),
    tag = "dishes"
)]
pub async fn create_dish(
    api: web::Data<DishApi>,
    body: web::Json<Body<DishPayload>>,
) -> Result<HttpResponse, AppError> {
    let dish = api.create(body.into_inner().data)?;
    Ok(HttpResponse::Created().json(Data { data: dish }))
}

/// GET /dishes/{dishId}
#[utoipa::path(
    get,
    path = "/dishes/{dishId}",
    params(("dishId" = String, Path, description = "Dish id")),
    responses(
        (status = 200, description = "Dish found", body = Dish),
        (status = 404, description = "Dish does not exist"),
    ),
    tag = "dishes"
)]
pub async fn read_dish(
    api: web::Data<DishApi>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let dish = api.read(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(Data { data: dish }))
}

/// PUT /dishes/{dishId}
///
/// Replaces every field but the id; a body id, when present, must match the
/// route.
#[utoipa::path(
    put,
    path = "/dishes/{dishId}",
    params(("dishId" = String, Path, description = "Dish id")),
    request_body = DishPayload,
    responses(
        (status = 200, description = "Dish updated", body = Dish),
        (status = 400, description = "Missing field, invalid price or id mismatch"),
        (status = 404, description = "Dish does not exist"),
    ),
    tag = "dishes"
)]
pub async fn update_dish(
    api: web::Data<DishApi>,
    path: web::Path<String>,
    body: web::Json<Body<DishPayload>>,
) -> Result<HttpResponse, AppError> {
    let dish = api.update(&path.into_inner(), body.into_inner().data)?;
    Ok(HttpResponse::Ok().json(Data { data: dish }))
}
