use thiserror::Error;

/// Every way a dish or order operation can fail, with the human-readable
/// message that ends up in the HTTP error body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Dish does not exist: {0}")]
    DishNotFound(String),

    #[error("Order id not found: {0}")]
    OrderNotFound(String),

    #[error("Must include a {0}")]
    MissingField(&'static str),

    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    #[error("Order must include at least one dish")]
    NoDishes,

    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidQuantity(usize),

    #[error("Dish id does not match route id. Dish: {body}, Route: {route}")]
    DishIdMismatch { body: String, route: String },

    #[error("Order id does not match route id. Order: {body}, Route: {route}")]
    OrderIdMismatch { body: String, route: String },

    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    #[error("A delivered order cannot be changed")]
    DeliveredImmutable,

    #[error("An order cannot be deleted unless it is pending")]
    DeleteNotAllowed,

    #[error("Internal error: {0}")]
    Internal(String),
}
