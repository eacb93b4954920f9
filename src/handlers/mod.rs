pub mod dishes;
pub mod orders;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;

/// Request envelope: clients send `{ "data": { ... } }`. A missing `data`
/// member behaves like an empty object, so the field-presence checks report
/// the first missing field instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct Body<T: Default> {
    #[serde(default)]
    pub data: T,
}

/// Response envelope.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

/// Fallback for verbs a route does not support.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}

/// Rejects malformed JSON bodies with the same `{ "message": ... }` shape the
/// rest of the API uses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "message": message })),
        )
        .into()
    })
}
