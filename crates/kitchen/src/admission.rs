//! Order admission — turning a finalized cart into a confirmed order.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use common::OrderId;
use domain::{Cart, DomainError, FulfillmentType, Order, PaymentMethod};

use crate::config::Config;
use crate::pipeline::KitchenPipeline;

/// The admission desk: assigns ticket numbers and hands confirmed orders
/// to the kitchen pipeline.
///
/// Ticket numbers come from a monotonic counter rather than the clock, so
/// the pipeline's arrival ordering holds even across terminals with skewed
/// clocks.
#[derive(Debug)]
pub struct AdmissionService {
    pipeline: KitchenPipeline,
    next_ticket: AtomicU64,
}

impl AdmissionService {
    /// Creates an admission desk feeding the given pipeline, starting from
    /// the default ticket number.
    pub fn new(pipeline: KitchenPipeline) -> Self {
        Self::with_config(pipeline, &Config::default())
    }

    /// Creates an admission desk with configured ticket numbering.
    pub fn with_config(pipeline: KitchenPipeline, config: &Config) -> Self {
        Self {
            pipeline,
            next_ticket: AtomicU64::new(config.first_ticket),
        }
    }

    /// Returns a handle to the pipeline this desk feeds.
    pub fn pipeline(&self) -> &KitchenPipeline {
        &self.pipeline
    }

    /// Finalizes a cart into a confirmed order.
    ///
    /// Rejects an empty cart with [`DomainError::InvalidState`], leaving
    /// the cart untouched. On success the order carries a deep copy of the
    /// lines and the totals frozen at this instant, the source cart is
    /// cleared, and the order enters the pipeline at `Pending`.
    #[tracing::instrument(skip(self, cart, table_label), fields(lines = cart.line_count()))]
    pub async fn finalize(
        &self,
        cart: &mut Cart,
        payment_method: PaymentMethod,
        fulfillment: FulfillmentType,
        table_label: impl Into<String>,
    ) -> Result<Order, DomainError> {
        if cart.is_empty() {
            return Err(DomainError::InvalidState {
                reason: "cannot finalize an empty cart",
            });
        }

        let id = OrderId::new(self.next_ticket.fetch_add(1, Ordering::SeqCst));
        let order = Order::new(
            id,
            cart.lines().to_vec(),
            cart.totals(),
            payment_method,
            fulfillment,
            table_label,
            Utc::now(),
        );
        cart.clear();

        self.pipeline.admit(order.clone()).await;
        metrics::counter!("orders_admitted_total").increment(1);
        tracing::info!(order_id = %id, total = %order.total(), "order admitted");

        Ok(order)
    }
}
