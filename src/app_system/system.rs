use tracing::{error, info};

use crate::clients::{FoodClient, OrderClient, ReviewClient};
use crate::config::Config;
use crate::domain::{Food, Order, Review};
use crate::store::{CollectionActor, StoreError};

/// The assembled storefront core.
///
/// Responsible for starting one collection actor per JSON file, wiring the
/// domain clients on top, and handling shutdown.
pub struct FoodOrderSystem {
    pub order_client: OrderClient,
    pub review_client: ReviewClient,
    pub food_client: FoodClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FoodOrderSystem {
    /// Loads the collections under `config.data_dir` and spawns their actors.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| StoreError::Persist(format!("{}: {e}", config.data_dir.display())))?;

        // 1. Food catalog
        let (food_actor, food_store) = CollectionActor::<Food>::open(
            config.data_dir.join("foods.json"),
            config.channel_capacity,
            "food",
        )?;
        let food_client = FoodClient::new(food_store);
        let food_handle = tokio::spawn(food_actor.run());

        // 2. Orders
        let (order_actor, order_store) = CollectionActor::<Order>::open(
            config.data_dir.join("orders.json"),
            config.channel_capacity,
            "order",
        )?;
        let order_client = OrderClient::new(order_store);
        let order_handle = tokio::spawn(order_actor.run());

        // 3. Reviews, which write food ratings through the food client
        let (review_actor, review_store) = CollectionActor::<Review>::open(
            config.data_dir.join("reviews.json"),
            config.channel_capacity,
            "review",
        )?;
        let review_client = ReviewClient::new(review_store, food_client.clone());
        let review_handle = tokio::spawn(review_actor.run());

        info!(data_dir = %config.data_dir.display(), "Storefront system started");
        Ok(Self {
            order_client,
            review_client,
            food_client,
            handles: vec![food_handle, order_handle, review_handle],
        })
    }

    /// Drops every client handle (closing the request channels) and waits for
    /// the collection actors to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.review_client);
        drop(self.food_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection actor task failed: {:?}", e);
                return Err(format!("Collection actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
