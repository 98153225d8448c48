use crate::model::{Patch, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn to_quantity(quantity: i64) -> Result<u64, ProductError> {
    u64::try_from(quantity).map_err(|_| ProductError::InvalidQuantity(quantity))
}

/// Fields that are not nullable reject an explicit `null` instead of clearing the value.
fn required<T>(patch: Patch<T>, field: &'static str) -> Result<Option<T>, ProductError> {
    match patch {
        Patch::Absent => Ok(None),
        Patch::Null => Err(ProductError::RequiredField(field)),
        Patch::Value(value) => Ok(Some(value)),
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Product::new(
            id,
            params.name,
            params.description,
            params.price,
            to_quantity(params.quantity)?,
        ))
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = required(update.name, "name")? {
            self.name = name;
        }
        update.description.apply_to(&mut self.description);
        if let Some(price) = required(update.price, "price")? {
            self.price = price;
        }
        if let Some(quantity) = required(update.quantity, "quantity")? {
            self.quantity = to_quantity(quantity)?;
        }
        Ok(())
    }
}
