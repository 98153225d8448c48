use crate::clients::ProductClient;
use crate::product_actor::{self, ProductError};
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

/// Owns the running product actor.
pub struct ProductSystem {
    pub product_client: ProductClient,
    handles: Vec<JoinHandle<()>>,
}

impl ProductSystem {
    /// Creates the seeded product actor and starts it. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Result<Self, ProductError> {
        let (product_actor, generic_client) = product_actor::new(buffer_size)?;
        let product_handle = tokio::spawn(product_actor.run(()));

        Ok(Self {
            product_client: ProductClient::new(generic_client),
            handles: vec![product_handle],
        })
    }

    /// Drops this system's client and waits for the actor to stop.
    ///
    /// Fails with the task's [`JoinError`] if the actor panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down product system");
        drop(self.product_client);

        for handle in self.handles {
            handle.await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::ActorClient;

    #[tokio::test]
    async fn test_new_system_serves_seeded_catalogue() {
        let system = ProductSystem::new(8).unwrap();
        let names: Vec<String> = system
            .product_client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Phone", "Laptop", "Pen", "Table"]);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_completes_once_clones_are_gone() {
        let system = ProductSystem::new(8).unwrap();
        let extra = system.product_client.clone();
        let reader = tokio::spawn(async move { extra.list().await.map(|all| all.len()) });

        assert_eq!(reader.await.unwrap().unwrap(), 4);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_reports_panicked_actor() {
        let healthy = ProductSystem::new(8).unwrap();
        let system = ProductSystem {
            product_client: healthy.product_client.clone(),
            handles: vec![tokio::spawn(async { panic!("actor crashed") })],
        };

        let err = system.shutdown().await.unwrap_err();
        assert!(err.is_panic());
        healthy.shutdown().await.unwrap();
    }
}
