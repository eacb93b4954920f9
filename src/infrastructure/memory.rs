//! In-memory repository adapters. Each collection is a `Mutex`-guarded `Vec`
//! so the existence and uniqueness invariants hold across actix's worker
//! threads; every operation takes its collection's lock exactly once.
//! Restarting the process resets all data.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::domain::dish::{Dish, DishFields};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderFields, OrderStatus};
use crate::domain::ports::{DishRepository, OrderRepository};

/// A new record identifier, unique within the running process.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn lock<T>(collection: &Mutex<T>) -> Result<MutexGuard<'_, T>, DomainError> {
    collection
        .lock()
        .map_err(|e| DomainError::Internal(e.to_string()))
}

#[derive(Debug, Default)]
pub struct InMemoryDishRepository {
    dishes: Mutex<Vec<Dish>>,
}

impl DishRepository for InMemoryDishRepository {
    fn list(&self) -> Result<Vec<Dish>, DomainError> {
        Ok(lock(&self.dishes)?.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Dish>, DomainError> {
        Ok(lock(&self.dishes)?.iter().find(|d| d.id == id).cloned())
    }

    fn insert(&self, fields: DishFields) -> Result<Dish, DomainError> {
        let mut dishes = lock(&self.dishes)?;
        let dish = Dish::new(next_id(), fields);
        dishes.push(dish.clone());
        Ok(dish)
    }

    fn update(&self, id: &str, fields: DishFields) -> Result<Option<Dish>, DomainError> {
        let mut dishes = lock(&self.dishes)?;
        let Some(dish) = dishes.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        dish.name = fields.name;
        dish.description = fields.description;
        dish.price = fields.price;
        dish.image_url = fields.image_url;
        Ok(Some(dish.clone()))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl OrderRepository for InMemoryOrderRepository {
    fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(lock(&self.orders)?.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Order>, DomainError> {
        Ok(lock(&self.orders)?.iter().find(|o| o.id == id).cloned())
    }

    fn insert(&self, fields: OrderFields) -> Result<Order, DomainError> {
        let mut orders = lock(&self.orders)?;
        let order = Order::new(next_id(), fields);
        orders.push(order.clone());
        Ok(order)
    }

    fn update(
        &self,
        id: &str,
        fields: OrderFields,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let mut orders = lock(&self.orders)?;
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        // Checked under the same lock as the write, so a rival request
        // cannot deliver the order between the guard and the mutation.
        if order.status == Some(OrderStatus::Delivered) {
            return Err(DomainError::DeliveredImmutable);
        }
        order.deliver_to = fields.deliver_to;
        order.mobile_number = fields.mobile_number;
        order.status = Some(status);
        order.dishes = fields.dishes;
        Ok(Some(order.clone()))
    }

    fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut orders = lock(&self.orders)?;
        match orders.iter().position(|o| o.id == id) {
            Some(index) => {
                if !matches!(orders[index].status, None | Some(OrderStatus::Pending)) {
                    return Err(DomainError::DeleteNotAllowed);
                }
                orders.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
