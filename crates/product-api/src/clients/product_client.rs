//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods that speak
//! [`ProductError`] instead of framework errors.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(product_error) = e.entity_error::<ProductError>() {
            return product_error.clone();
        }
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Fetch one product, treating a missing id as an error.
    #[instrument(skip(self))]
    pub async fn find(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Overwrite every field of an existing product; the id and position are kept.
    #[instrument(skip(self))]
    pub async fn replace_product(
        &self,
        id: ProductId,
        params: ProductCreate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.replace(id, params).await.map_err(Self::map_error)
    }

    /// Merge the fields present in `update` into an existing product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Patch;
    use actor_framework::mock::{create_mock_client, expect_create, expect_update, MockClient};

    fn cup(id: u64) -> Product {
        Product::new(ProductId(id), "Cup", None, 5.0, 10)
    }

    #[tokio::test]
    async fn test_create_product_sends_payload() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate::new("Cup", None, 5.0, 10))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Cup");
        assert_eq!(params.description, None);
        responder.send(Ok(cup(5))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, ProductId(5));
    }

    #[tokio::test]
    async fn test_update_product_forwards_patch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let update_task = tokio::spawn(async move {
            let update = ProductUpdate {
                price: Patch::Value(7.5),
                ..Default::default()
            };
            product_client.update_product(ProductId(2), update).await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ProductId(2));
        assert_eq!(update.price, Patch::Value(7.5));
        assert!(update.name.is_absent());
        responder.send(Ok(cup(2))).unwrap();

        assert!(update_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_find_maps_missing_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(9)).return_ok(None);
        let product_client = ProductClient::new(mock.client());

        let err = product_client.find(ProductId(9)).await.unwrap_err();
        assert_eq!(err, ProductError::NotFound("9".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_framework_not_found_becomes_product_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_delete(ProductId(3))
            .return_err(FrameworkError::NotFound("3".into()));
        let product_client = ProductClient::new(mock.client());

        assert_eq!(
            product_client.delete(ProductId(3)).await,
            Err(ProductError::NotFound("3".to_string()))
        );
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update(ProductId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                ProductError::RequiredField("name"),
            )));
        let product_client = ProductClient::new(mock.client());

        let err = product_client
            .update_product(ProductId(1), ProductUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::RequiredField("name"));
    }

    #[tokio::test]
    async fn test_closed_channel_is_communication_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list()
            .return_err(FrameworkError::ActorClosed);
        let product_client = ProductClient::new(mock.client());

        assert!(matches!(
            product_client.list().await,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }
}
