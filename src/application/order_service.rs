use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderFields, OrderPayload, OrderStatus};
use crate::domain::ports::OrderRepository;

use super::validate::{required, required_text, valid_dishes};

/// Order operations: the validation chain, the status transition guard and
/// the delete guard in front of the repository.
pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    pub fn read(&self, id: &str) -> Result<Order, DomainError> {
        self.repo
            .get(id)?
            .ok_or_else(|| DomainError::OrderNotFound(id.to_string()))
    }

    /// Creation never assigns a status, even if the client sends one; the
    /// order stays status-less until its first update.
    pub fn create(&self, payload: OrderPayload) -> Result<Order, DomainError> {
        let fields = validate_fields(&payload)?;
        self.repo.insert(fields)
    }

    pub fn update(&self, id: &str, payload: OrderPayload) -> Result<Order, DomainError> {
        let current = self.read(id)?;
        // Delivered is terminal: reject before looking at the body at all.
        if current.status == Some(OrderStatus::Delivered) {
            return Err(DomainError::DeliveredImmutable);
        }
        check_route_id(id, payload.id.as_deref())?;
        let fields = validate_fields(&payload)?;
        let status = required_status(payload.status.as_deref())?;
        self.repo
            .update(id, fields, status)?
            .ok_or_else(|| DomainError::OrderNotFound(id.to_string()))
    }

    /// An order that has never been assigned a status counts as pending.
    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        let order = self.read(id)?;
        if !matches!(order.status, None | Some(OrderStatus::Pending)) {
            return Err(DomainError::DeleteNotAllowed);
        }
        self.repo.delete(id)?;
        Ok(())
    }
}

fn validate_fields(payload: &OrderPayload) -> Result<OrderFields, DomainError> {
    let deliver_to = required_text("deliverTo", payload.deliver_to.as_ref())?;
    let mobile_number = required_text("mobileNumber", payload.mobile_number.as_ref())?;
    let lines = required("dishes", payload.dishes.as_ref())?;
    let dishes = valid_dishes(lines)?;
    Ok(OrderFields {
        deliver_to,
        mobile_number,
        dishes,
    })
}

fn required_status(value: Option<&str>) -> Result<OrderStatus, DomainError> {
    value
        .and_then(OrderStatus::parse)
        .ok_or(DomainError::InvalidStatus)
}

fn check_route_id(route: &str, body: Option<&str>) -> Result<(), DomainError> {
    match body {
        Some(id) if !id.is_empty() && id != route => Err(DomainError::OrderIdMismatch {
            body: id.to_string(),
            route: route.to_string(),
        }),
        _ => Ok(()),
    }
}
