//! The kitchen production pipeline — shared order store and stage board.

use std::collections::BTreeMap;
use std::sync::Arc;

use common::OrderId;
use domain::{DomainError, Order, Stage};
use tokio::sync::RwLock;

/// Owns every admitted order and advances each through its fulfillment
/// stages.
///
/// A cheap `Clone` handle over shared state, so one pipeline can back the
/// kitchen board, the billing view, and every staff terminal at once. The
/// map is keyed by `OrderId`, and ticket numbers are monotonic per
/// admission, so ascending iteration is arrival order — queries never
/// compare wall-clock timestamps.
#[derive(Debug, Clone, Default)]
pub struct KitchenPipeline {
    orders: Arc<RwLock<BTreeMap<OrderId, Order>>>,
}

impl KitchenPipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a freshly admitted order at its initial stage.
    ///
    /// Crate-private: orders enter the pipeline through the admission desk
    /// only, which guarantees they arrive at `Pending` with frozen totals.
    pub(crate) async fn admit(&self, order: Order) {
        tracing::debug!(order_id = %order.id(), stage = %order.stage(), "order admitted to pipeline");
        self.orders.write().await.insert(order.id(), order);
    }

    /// Moves an order forward by exactly one stage.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown id and
    /// [`DomainError::InvalidTransition`] once the order is `Served`.
    /// The mutation happens under the write lock, so two terminals can
    /// never double-advance the same order.
    #[tracing::instrument(skip(self))]
    pub async fn advance(&self, order_id: OrderId) -> Result<Stage, DomainError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&order_id)
            .ok_or(DomainError::NotFound { order_id })?;

        let stage = order.advance()?;
        metrics::counter!("kitchen_stage_advances_total").increment(1);
        tracing::debug!(order_id = %order_id, stage = %stage, "order advanced");
        Ok(stage)
    }

    /// Returns the orders currently at a stage, oldest first.
    ///
    /// The result is a snapshot: iterate it as often as needed, it will not
    /// observe later mutations.
    pub async fn by_stage(&self, stage: Stage) -> Vec<Order> {
        self.orders
            .read()
            .await
            .values()
            .filter(|o| o.stage() == stage)
            .cloned()
            .collect()
    }

    /// Returns the terminal orders for the billing/history view.
    pub async fn served(&self) -> Vec<Order> {
        self.by_stage(Stage::Served).await
    }

    /// Looks up a single order.
    pub async fn get(&self, order_id: OrderId) -> Option<Order> {
        self.orders.read().await.get(&order_id).cloned()
    }

    /// Returns the per-column counts for the kitchen board.
    pub async fn stage_counts(&self) -> [(Stage, usize); 4] {
        let orders = self.orders.read().await;
        Stage::ALL.map(|stage| {
            let count = orders.values().filter(|o| o.stage() == stage).count();
            (stage, count)
        })
    }

    /// Returns the total number of orders the pipeline has ever admitted
    /// this session (orders are never destroyed, only advanced).
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Returns true if no orders have been admitted yet.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}
