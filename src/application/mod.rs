pub mod dish_service;
pub mod order_service;
mod validate;

pub use dish_service::DishService;
pub use order_service::OrderService;
