use tracing::{debug, error, info, instrument};

use crate::auth::{require_admin, require_authenticated};
use crate::clients::FoodClient;
use crate::domain::{Principal, Review, ReviewCreate, ReviewDraft, ReviewEdit, ReviewPatch};
use crate::error::ReviewError;
use crate::rating;
use crate::store::StoreClient;

/// Client for the reviews collection.
///
/// Every mutation here is followed by a synchronous recomputation of the
/// reviewed food's aggregate rating, written through the food client. The two
/// writes are sequential, not transactional: a failure in the second is
/// surfaced to the caller while the first stands.
#[derive(Clone)]
pub struct ReviewClient {
    inner: StoreClient<Review>,
    food_client: FoodClient,
}

impl ReviewClient {
    pub fn new(inner: StoreClient<Review>, food_client: FoodClient) -> Self {
        Self { inner, food_client }
    }

    #[instrument(skip(self, principal, draft))]
    pub async fn create_review(
        &self,
        principal: Option<&Principal>,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewError> {
        let principal = require_authenticated(principal)?;

        if draft.food_id.trim().is_empty() {
            return Err(ReviewError::ValidationError("foodId is required".into()));
        }
        if draft.rating == 0 {
            return Err(ReviewError::ValidationError("rating is required".into()));
        }
        if draft.comment.trim().is_empty() {
            return Err(ReviewError::ValidationError("comment is required".into()));
        }

        // The food must exist before we accept a review for it.
        match self.food_client.get_food(draft.food_id.clone()).await {
            Ok(Some(food)) => info!(food_name = %food.name, "Food validation successful"),
            Ok(None) => {
                error!("Food not found");
                return Err(ReviewError::FoodNotFound(draft.food_id));
            }
            Err(e) => {
                error!(error = %e, "Food validation failed");
                return Err(ReviewError::StoreFailure(e.to_string()));
            }
        }

        let review = self
            .inner
            .create(ReviewCreate {
                user_id: principal.id.clone(),
                user_name: principal.name.clone(),
                food_id: draft.food_id,
                rating: draft.rating,
                comment: draft.comment,
            })
            .await?;

        self.refresh_food_rating(&review.food_id, None).await?;
        info!(review_id = %review.id, "Review created");
        Ok(review)
    }

    #[instrument(skip(self))]
    pub async fn list_for_food(&self, food_id: String) -> Result<Vec<Review>, ReviewError> {
        debug!("Sending request");
        let reviews = self.inner.list().await?;
        Ok(reviews
            .into_iter()
            .filter(|r| r.food_id == food_id)
            .collect())
    }

    #[instrument(skip(self, principal))]
    pub async fn list_mine(
        &self,
        principal: Option<&Principal>,
    ) -> Result<Vec<Review>, ReviewError> {
        let principal = require_authenticated(principal)?;
        debug!("Sending request");
        let reviews = self.inner.list().await?;
        Ok(reviews
            .into_iter()
            .filter(|r| r.user_id == principal.id)
            .collect())
    }

    #[instrument(skip(self, principal))]
    pub async fn list_all(&self, principal: Option<&Principal>) -> Result<Vec<Review>, ReviewError> {
        require_admin(principal)?;
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    /// Owners rewrite rating and comment; admins only attach a reply.
    ///
    /// Admin replies never touch the rating, so that path skips the
    /// recomputation entirely.
    #[instrument(skip(self, principal, edit))]
    pub async fn edit_review(
        &self,
        id: String,
        principal: Option<&Principal>,
        edit: ReviewEdit,
    ) -> Result<Review, ReviewError> {
        let principal = require_authenticated(principal)?;
        let review = self
            .inner
            .find(id.clone())
            .await?
            .ok_or_else(|| ReviewError::NotFound(id.clone()))?;
        if !principal.is_admin && review.user_id != principal.id {
            return Err(ReviewError::Forbidden);
        }

        let patch = if principal.is_admin {
            ReviewPatch::AdminReply(edit.admin_reply)
        } else {
            let rating = edit
                .rating
                .filter(|r| *r != 0)
                .ok_or_else(|| ReviewError::ValidationError("rating is required".into()))?;
            let comment = edit
                .comment
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| ReviewError::ValidationError("comment is required".into()))?;
            // Fold the new rating into the aggregate before the review itself
            // is rewritten, so the recorded average never mixes old and new
            // values.
            self.refresh_food_rating(&review.food_id, Some((&review.id, rating)))
                .await?;
            ReviewPatch::OwnerEdit { rating, comment }
        };

        let updated = self.inner.replace(id, patch).await?;
        info!(review_id = %updated.id, "Review updated");
        Ok(updated)
    }

    #[instrument(skip(self, principal))]
    pub async fn delete_review(
        &self,
        id: String,
        principal: Option<&Principal>,
    ) -> Result<(), ReviewError> {
        let principal = require_authenticated(principal)?;
        let review = self
            .inner
            .find(id.clone())
            .await?
            .ok_or_else(|| ReviewError::NotFound(id.clone()))?;
        if !principal.is_admin && review.user_id != principal.id {
            return Err(ReviewError::Forbidden);
        }

        self.inner.remove(id).await?;
        self.refresh_food_rating(&review.food_id, None).await?;
        info!(review_id = %review.id, food_id = %review.food_id, "Review deleted");
        Ok(())
    }

    /// Recomputes the food's aggregate from the full review set and writes it
    /// through the food client.
    ///
    /// `replacement` substitutes a not-yet-persisted rating for one review so
    /// an owner edit and the recorded average stay mutually consistent. An
    /// empty review set resets the aggregate to the literal `0.0`.
    async fn refresh_food_rating(
        &self,
        food_id: &str,
        replacement: Option<(&str, i64)>,
    ) -> Result<(), ReviewError> {
        let ratings: Vec<i64> = self
            .inner
            .list()
            .await?
            .into_iter()
            .filter(|r| r.food_id == food_id)
            .map(|r| match replacement {
                Some((id, rating)) if r.id == id => rating,
                _ => r.rating,
            })
            .collect();

        let value = if ratings.is_empty() {
            0.0
        } else {
            rating::average(&ratings)
        };
        self.food_client.set_rating(food_id.to_string(), value).await?;
        debug!(food_id, rating = value, "Aggregate rating refreshed");
        Ok(())
    }
}
