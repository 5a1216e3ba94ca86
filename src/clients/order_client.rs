use tracing::{debug, info, instrument};

use crate::auth::{require_admin, require_authenticated};
use crate::domain::{Order, OrderCreate, OrderDraft, OrderPatch, Principal};
use crate::error::OrderError;
use crate::store::StoreClient;

/// Client for the orders collection.
///
/// Owns the order lifecycle: creation stamps the caller's identity and the
/// initial status, lookups enforce ownership, and only admins move an order
/// through its statuses.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, principal, draft))]
    pub async fn create_order(
        &self,
        principal: Option<&Principal>,
        draft: OrderDraft,
    ) -> Result<Order, OrderError> {
        let principal = require_authenticated(principal)?;

        if draft.items.is_empty() {
            return Err(OrderError::ValidationError("items must not be empty".into()));
        }
        if draft.total_amount <= 0.0 {
            return Err(OrderError::ValidationError("totalAmount must be positive".into()));
        }
        for (field, value) in [
            ("address", &draft.address),
            ("phone", &draft.phone),
            ("paymentMethod", &draft.payment_method),
        ] {
            if value.trim().is_empty() {
                return Err(OrderError::ValidationError(format!("{field} is required")));
            }
        }

        debug!("Sending request");
        let order = self
            .inner
            .create(OrderCreate {
                user_id: principal.id.clone(),
                items: draft.items,
                total_amount: draft.total_amount,
                address: draft.address,
                phone: draft.phone,
                payment_method: draft.payment_method,
            })
            .await?;
        info!(order_id = %order.id, total = %order.total_amount, "Order created");
        Ok(order)
    }

    /// Lookup restricted to the order's owner and admins.
    #[instrument(skip(self, principal))]
    pub async fn get_order(
        &self,
        id: String,
        principal: Option<&Principal>,
    ) -> Result<Order, OrderError> {
        let principal = require_authenticated(principal)?;
        debug!("Sending request");
        let order = self
            .inner
            .find(id.clone())
            .await?
            .ok_or(OrderError::NotFound(id))?;
        if !principal.is_admin && order.user_id != principal.id {
            return Err(OrderError::Forbidden);
        }
        Ok(order)
    }

    #[instrument(skip(self, principal))]
    pub async fn list_my_orders(
        &self,
        principal: Option<&Principal>,
    ) -> Result<Vec<Order>, OrderError> {
        let principal = require_authenticated(principal)?;
        debug!("Sending request");
        let orders = self.inner.list().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.user_id == principal.id)
            .collect())
    }

    #[instrument(skip(self, principal))]
    pub async fn list_all_orders(
        &self,
        principal: Option<&Principal>,
    ) -> Result<Vec<Order>, OrderError> {
        require_admin(principal)?;
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    /// Overwrites the status field only. Statuses are free-form non-empty
    /// strings; no transition graph is enforced.
    #[instrument(skip(self, principal))]
    pub async fn set_status(
        &self,
        id: String,
        new_status: String,
        principal: Option<&Principal>,
    ) -> Result<Order, OrderError> {
        require_admin(principal)?;
        if new_status.trim().is_empty() {
            return Err(OrderError::ValidationError("status is required".into()));
        }

        debug!("Sending request");
        let order = self.inner.replace(id, OrderPatch { status: new_status }).await?;
        info!(order_id = %order.id, status = %order.status, "Order status updated");
        Ok(order)
    }
}
