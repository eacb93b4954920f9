use super::dish::{Dish, DishFields};
use super::errors::DomainError;
use super::order::{Order, OrderFields, OrderStatus};

/// Storage port for the dish collection. Implementations must preserve
/// insertion order and keep ids unique.
pub trait DishRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Dish>, DomainError>;
    fn get(&self, id: &str) -> Result<Option<Dish>, DomainError>;
    /// Assigns a fresh id and appends.
    fn insert(&self, fields: DishFields) -> Result<Dish, DomainError>;
    /// Replaces every field but the id, keeping the record's position.
    /// Returns `None` when no dish has the given id.
    fn update(&self, id: &str, fields: DishFields) -> Result<Option<Dish>, DomainError>;
}

/// Storage port for the order collection.
pub trait OrderRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    fn get(&self, id: &str) -> Result<Option<Order>, DomainError>;
    /// Assigns a fresh id and appends; the new order has no status.
    fn insert(&self, fields: OrderFields) -> Result<Order, DomainError>;
    /// Overwrites fields and status in place. Returns `None` when no order
    /// has the given id, and `DeliveredImmutable` when the stored order is
    /// already delivered; the guard and the write happen atomically.
    fn update(
        &self,
        id: &str,
        fields: OrderFields,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError>;
    /// Returns whether an order was actually removed. Fails with
    /// `DeleteNotAllowed` when the stored status is neither pending nor
    /// unset; the guard and the removal happen atomically.
    fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
