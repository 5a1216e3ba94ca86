//! Bindings of the domain entities to the collection store.

use chrono::Utc;

use crate::domain::{
    Food, FoodCreate, FoodPatch, Order, OrderCreate, OrderPatch, Review, ReviewCreate,
    ReviewPatch, INITIAL_ORDER_STATUS,
};
use crate::store::Record;

impl Record for Order {
    type CreatePayload = OrderCreate;
    type Patch = OrderPatch;

    fn id(&self) -> &str {
        &self.id
    }

    /// New orders always enter the pipeline as "Processing".
    fn from_create(id: String, payload: OrderCreate) -> Self {
        Self {
            id,
            user_id: payload.user_id,
            items: payload.items,
            total_amount: payload.total_amount,
            address: payload.address,
            phone: payload.phone,
            payment_method: payload.payment_method,
            status: INITIAL_ORDER_STATUS.to_string(),
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, patch: OrderPatch) {
        self.status = patch.status;
    }
}

impl Record for Review {
    type CreatePayload = ReviewCreate;
    type Patch = ReviewPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, payload: ReviewCreate) -> Self {
        Self {
            id,
            user_id: payload.user_id,
            food_id: payload.food_id,
            rating: payload.rating,
            comment: payload.comment,
            user_name: payload.user_name,
            admin_reply: None,
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, patch: ReviewPatch) {
        match patch {
            ReviewPatch::OwnerEdit { rating, comment } => {
                self.rating = rating;
                self.comment = comment;
            }
            ReviewPatch::AdminReply(reply) => self.admin_reply = reply,
        }
    }
}

impl Record for Food {
    type CreatePayload = FoodCreate;
    type Patch = FoodPatch;

    fn id(&self) -> &str {
        &self.id
    }

    /// New foods start unrated and unlisted from the popular shelf.
    fn from_create(id: String, payload: FoodCreate) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            image: payload.image,
            popular: false,
            rating: 0.0,
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, patch: FoodPatch) {
        self.rating = patch.rating;
    }
}
