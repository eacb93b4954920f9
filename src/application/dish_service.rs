use crate::domain::dish::{Dish, DishFields, DishPayload};
use crate::domain::errors::DomainError;
use crate::domain::ports::DishRepository;

use super::validate::{required, required_text, valid_price};

/// Dish operations: the validation chain in front of the repository.
pub struct DishService<R> {
    repo: R,
}

impl<R: DishRepository> DishService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> Result<Vec<Dish>, DomainError> {
        self.repo.list()
    }

    pub fn read(&self, id: &str) -> Result<Dish, DomainError> {
        self.repo
            .get(id)?
            .ok_or_else(|| DomainError::DishNotFound(id.to_string()))
    }

    pub fn create(&self, payload: DishPayload) -> Result<Dish, DomainError> {
        let fields = validate_fields(&payload)?;
        self.repo.insert(fields)
    }

    pub fn update(&self, id: &str, payload: DishPayload) -> Result<Dish, DomainError> {
        self.read(id)?;
        let fields = validate_fields(&payload)?;
        check_route_id(id, payload.id.as_deref())?;
        self.repo
            .update(id, fields)?
            .ok_or_else(|| DomainError::DishNotFound(id.to_string()))
    }
}

/// Presence checks run for all four fields before the price value check, so
/// a dish with a bad price but a missing image_url reports the missing field.
fn validate_fields(payload: &DishPayload) -> Result<DishFields, DomainError> {
    let name = required_text("name", payload.name.as_ref())?;
    let description = required_text("description", payload.description.as_ref())?;
    let raw_price = required("price", payload.price.as_ref())?;
    let image_url = required_text("image_url", payload.image_url.as_ref())?;
    let price = valid_price(raw_price)?;
    Ok(DishFields {
        name,
        description,
        price,
        image_url,
    })
}

/// A body id is optional, but when supplied (and non-empty) it must match
/// the route id.
fn check_route_id(route: &str, body: Option<&str>) -> Result<(), DomainError> {
    match body {
        Some(id) if !id.is_empty() && id != route => Err(DomainError::DishIdMismatch {
            body: id.to_string(),
            route: route.to_string(),
        }),
        _ => Ok(()),
    }
}
