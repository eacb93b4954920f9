use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Order lifecycle stage. `Delivered` is terminal: once an order reaches it,
/// no further update is accepted. Any non-delivered status may move to any
/// of the four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "preparing" => Some(Self::Preparing),
            "out-for-delivery" => Some(Self::OutForDelivery),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated line item: a dish reference and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderLine {
    #[serde(rename = "dishId", skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: i64,
}

/// A customer order. `status` stays unset until the first successful update
/// and is omitted from the JSON representation while unset; an order without
/// a status is treated as pending by the delete guard.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Order {
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLine>,
}

/// Validated order fields shared by create and update. The status is carried
/// separately because creation never sets one.
#[derive(Debug, Clone)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
}

/// Raw order payload as sent by the client, before validation.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderPayload {
    pub id: Option<String>,
    #[serde(rename = "deliverTo")]
    pub deliver_to: Option<String>,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: Option<String>,
    pub status: Option<String>,
    /// Kept as raw JSON so a non-array value (or a bad quantity inside one)
    /// fails the dishes check rather than deserialization.
    #[schema(value_type = Option<Vec<OrderLine>>)]
    pub dishes: Option<Value>,
}

impl Order {
    pub fn new(id: String, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: None,
            dishes: fields.dishes,
        }
    }
}
