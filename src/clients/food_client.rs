use tracing::{debug, info, instrument};

use crate::auth::require_admin;
use crate::domain::{Food, FoodCreate, FoodPatch, Principal};
use crate::error::FoodError;
use crate::store::StoreClient;

/// Client for the food catalog collection.
///
/// The `rating` field of a food is derived data; the review side is its only
/// writer, through [`FoodClient::set_rating`].
#[derive(Clone)]
pub struct FoodClient {
    inner: StoreClient<Food>,
}

impl FoodClient {
    pub fn new(inner: StoreClient<Food>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn get_food(&self, id: String) -> Result<Option<Food>, FoodError> {
        debug!("Sending request");
        Ok(self.inner.find(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_foods(&self) -> Result<Vec<Food>, FoodError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self, principal, draft))]
    pub async fn create_food(
        &self,
        principal: Option<&Principal>,
        draft: FoodCreate,
    ) -> Result<Food, FoodError> {
        require_admin(principal)?;
        for (field, value) in [
            ("name", &draft.name),
            ("description", &draft.description),
            ("category", &draft.category),
        ] {
            if value.trim().is_empty() {
                return Err(FoodError::ValidationError(format!("{field} is required")));
            }
        }
        if draft.price <= 0.0 {
            return Err(FoodError::ValidationError("price must be positive".into()));
        }

        debug!("Sending request");
        let food = self.inner.create(draft).await?;
        info!(food_id = %food.id, name = %food.name, "Food created");
        Ok(food)
    }

    /// Crate-internal write used by the review side after recomputing a
    /// food's aggregate.
    #[instrument(skip(self))]
    pub(crate) async fn set_rating(&self, id: String, rating: f64) -> Result<Food, FoodError> {
        debug!("Sending request");
        Ok(self.inner.replace(id, FoodPatch { rating }).await?)
    }
}
