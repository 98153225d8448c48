use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt::Display;

use super::body::{BodyFields, FromBody};
use super::patch::Patch;
use super::validation::{Validate, ValidationErrors};

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// Type-safe identifier for Products. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product in the inventory.
///
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor) through its
/// [`ActorEntity`](actor_framework::ActorEntity) impl, which takes a [`ProductCreate`] to
/// build or replace a record and a [`ProductUpdate`] to merge a partial change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: u64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor)
    /// * `name` - Product name
    /// * `description` - Optional free text
    /// * `price` - Unit price
    /// * `quantity` - Available stock quantity
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
        quantity: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            price,
            quantity,
        }
    }
}

/// Full product fields, used for create and for full replacement.
///
/// `quantity` is read as a signed integer so that a negative value is reported as a
/// constraint violation rather than as a malformed body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        description: Option<&str>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            price,
            quantity,
        }
    }
}

impl FromBody for ProductCreate {
    fn from_body(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = BodyFields::new(body)?;
        let name = fields.string("name");
        let description = fields.optional_string("description");
        let price = fields.float("price");
        let quantity = fields.integer("quantity");

        match (name, price, quantity) {
            (Some(name), Some(price), Some(quantity)) => {
                fields.finish()?;
                Ok(Self {
                    name,
                    description,
                    price,
                    quantity,
                })
            }
            _ => Err(fields.into_errors()),
        }
    }
}

impl Validate for ProductCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("name", &self.name, 1, NAME_MAX_CHARS);
        if let Some(description) = &self.description {
            errors.check_length("description", description, 0, DESCRIPTION_MAX_CHARS);
        }
        errors.check_positive("price", self.price);
        errors.check_quantity("quantity", self.quantity);
        errors.into_result()
    }
}

/// Partial product fields. Only fields present in the request are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub price: Patch<f64>,
    pub quantity: Patch<i64>,
}

impl FromBody for ProductUpdate {
    fn from_body(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = BodyFields::new(body)?;
        let update = Self {
            name: fields.patch_string("name"),
            description: fields.patch_string("description"),
            price: fields.patch_float("price"),
            quantity: fields.patch_integer("quantity"),
        };
        fields.finish()?;
        Ok(update)
    }
}

impl Validate for ProductUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.name {
            Patch::Absent => {}
            Patch::Null => {
                errors.check_not_null("name", "string_type", "Input should be a valid string")
            }
            Patch::Value(name) => errors.check_length("name", name, 1, NAME_MAX_CHARS),
        }
        if let Some(description) = self.description.as_value() {
            errors.check_length("description", description, 0, DESCRIPTION_MAX_CHARS);
        }
        match self.price {
            Patch::Absent => {}
            Patch::Null => {
                errors.check_not_null("price", "float_type", "Input should be a valid number")
            }
            Patch::Value(price) => errors.check_positive("price", price),
        }
        match self.quantity {
            Patch::Absent => {}
            Patch::Null => {
                errors.check_not_null("quantity", "int_type", "Input should be a valid integer")
            }
            Patch::Value(quantity) => errors.check_quantity("quantity", quantity),
        }

        errors.into_result()
    }
}
