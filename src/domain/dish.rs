use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A menu item. The id is assigned at creation time and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

/// Everything a dish carries except its id, already validated.
#[derive(Debug, Clone)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

/// Raw dish payload as sent by the client. Every field is optional so the
/// presence checks can name the first missing one instead of failing body
/// deserialization wholesale.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DishPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Kept as raw JSON so a non-integer price fails the price check rather
    /// than deserialization.
    #[schema(value_type = Option<i64>)]
    pub price: Option<Value>,
    pub image_url: Option<String>,
}

impl Dish {
    pub fn new(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }
}
