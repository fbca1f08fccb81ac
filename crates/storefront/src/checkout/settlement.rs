//! Simulated payment settlement.
//!
//! The checkout flow depends on a gateway interface rather than a timer,
//! so tests can inject scripted outcomes. Decline and timeout are modeled
//! even though the bundled gateway only ever approves.

use std::time::Duration;

use plainwear_core::{OrderId, Price};

/// What the flow hands the gateway when a payment is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementRequest {
    /// Cart total at submission time.
    pub amount: Price,
    /// Last four digits of the card, for receipts. Never the full number.
    pub card_tail: String,
}

/// Result of a settlement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// Payment authorized; the order exists now.
    Approved {
        /// Identifier assigned to the placed order.
        order_id: OrderId,
    },
    /// The processor refused the charge.
    Declined {
        /// Processor-supplied reason.
        reason: String,
    },
    /// The processor did not answer in time.
    TimedOut,
}

/// External payment-authorization step.
///
/// A settlement, once begun, always completes - there is no cancellation.
pub trait SettlementGateway {
    /// Settle the given request, yielding exactly one outcome.
    fn settle(
        &self,
        request: &SettlementRequest,
    ) -> impl Future<Output = SettlementOutcome> + Send;
}

/// Gateway that waits a fixed delay and then approves.
///
/// This is the production stand-in for a real processor: a single-attempt,
/// always-succeeds simulation.
#[derive(Debug, Clone)]
pub struct FixedDelaySettlement {
    delay: Duration,
}

impl FixedDelaySettlement {
    /// Delay used when none is configured, matching the original
    /// storefront's two-second simulation.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Create a gateway with the given settlement delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelaySettlement {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl SettlementGateway for FixedDelaySettlement {
    async fn settle(&self, request: &SettlementRequest) -> SettlementOutcome {
        tracing::info!(amount = %request.amount, "Settling payment");
        tokio::time::sleep(self.delay).await;

        let order_id = OrderId::generate();
        tracing::info!(%order_id, "Settlement approved");
        SettlementOutcome::Approved { order_id }
    }
}
