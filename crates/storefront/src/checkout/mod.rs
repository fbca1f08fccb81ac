//! Checkout state machine.
//!
//! Steps run Details -> Payment -> Confirmation, with back navigation from
//! Payment and a non-destructive close from Details. The cart stays live
//! and editable until settlement: removals during Details or Payment hit
//! the same cart the browse view uses, and the total follows immediately.
//! The only destructive transition is `continue_shopping`, which clears
//! the cart and blanks the form.

pub mod form;
pub mod settlement;

use plainwear_core::OrderId;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;

pub use form::{CheckoutForm, FieldError, FieldIssue, FormField};
pub use settlement::{
    FixedDelaySettlement, SettlementGateway, SettlementOutcome, SettlementRequest,
};

/// Where an open checkout currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Shipping details entry.
    Details,
    /// Payment details entry.
    Payment,
    /// Order placed; awaiting the continue-shopping reset.
    Confirmation,
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Details => write!(f, "details"),
            Self::Payment => write!(f, "payment"),
            Self::Confirmation => write!(f, "confirmation"),
        }
    }
}

/// Checkout transition errors. All recoverable: the flow stays where it
/// was and the caller corrects input or retries.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Checkout cannot open over an empty cart, and an emptied cart cannot
    /// settle.
    #[error("cart is empty")]
    EmptyCart,

    /// The operation needs an open checkout.
    #[error("checkout is not open")]
    NotOpen,

    /// The operation is not legal at the current step.
    #[error("expected step {expected}, but checkout is at {actual}")]
    WrongStep {
        /// Step the operation requires.
        expected: CheckoutStep,
        /// Step the flow is actually at.
        actual: CheckoutStep,
    },

    /// A settlement is already in flight; the submit control stays
    /// disabled until it completes.
    #[error("a settlement is already in progress")]
    AlreadyProcessing,

    /// `complete_settlement` was called with nothing in flight.
    #[error("no settlement is in progress")]
    NoSettlementInFlight,

    /// One or more form fields failed validation. The flow stays at the
    /// current step; nothing is partially submitted.
    #[error("validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// The processor refused the charge; the flow stays at Payment.
    #[error("payment declined: {reason}")]
    Declined {
        /// Processor-supplied reason.
        reason: String,
    },

    /// The processor did not answer; the flow stays at Payment.
    #[error("payment timed out")]
    SettlementTimedOut,
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The checkout session state machine.
///
/// `step` is `None` while checkout is closed. The form outlives the open
/// session on purpose: closing from Details keeps entered values, so
/// re-opening resumes mid-entry. Only [`CheckoutFlow::continue_shopping`]
/// resets it.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    step: Option<CheckoutStep>,
    form: CheckoutForm,
    processing: bool,
    order_id: Option<OrderId>,
}

impl CheckoutFlow {
    /// Create a closed flow with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step, or `None` when checkout is closed.
    #[must_use]
    pub const fn step(&self) -> Option<CheckoutStep> {
        self.step
    }

    /// True while checkout is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.step.is_some()
    }

    /// True while a settlement is in flight.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    /// The form record.
    #[must_use]
    pub const fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// ID of the placed order, present from Confirmation until the reset.
    #[must_use]
    pub const fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    /// Write one form field. Unconditional and immediate; validation only
    /// runs on submit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Open checkout at Details.
    ///
    /// Re-opening an already-open checkout is a no-op. Form values from a
    /// previous non-destructive close are kept.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::EmptyCart`] if the cart has no lines.
    pub fn open(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        if self.is_open() {
            return Ok(());
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        tracing::info!(lines = cart.len(), total = %cart.total(), "Checkout opened");
        self.step = Some(CheckoutStep::Details);
        Ok(())
    }

    /// Submit the Details step.
    ///
    /// Advances to Payment when every required shipping field validates.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::Validation`] with one entry per failing field, in
    /// which case the flow stays at Details; or a step error if checkout
    /// is not at Details.
    pub fn submit_details(&mut self) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Details)?;

        let errors = self.form.validate_shipping();
        if !errors.is_empty() {
            tracing::warn!(fields = errors.len(), "Shipping details rejected");
            return Err(CheckoutError::Validation(errors));
        }

        tracing::info!("Shipping details accepted");
        self.step = Some(CheckoutStep::Payment);
        Ok(())
    }

    /// Validate payment fields and mark a settlement as in flight.
    ///
    /// Returns the request to hand to a [`SettlementGateway`]. Split from
    /// [`Self::complete_settlement`] so the in-flight state is directly
    /// observable and testable.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::AlreadyProcessing`] if a settlement is in flight,
    /// [`CheckoutError::Validation`] for missing payment fields,
    /// [`CheckoutError::EmptyCart`] if mid-flow removals emptied the cart,
    /// or a step error if checkout is not at Payment.
    pub fn begin_settlement(&mut self, cart: &Cart) -> Result<SettlementRequest, CheckoutError> {
        if self.processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        self.require_step(CheckoutStep::Payment)?;

        let errors = self.form.validate_payment();
        if !errors.is_empty() {
            tracing::warn!(fields = errors.len(), "Payment details rejected");
            return Err(CheckoutError::Validation(errors));
        }

        // The cart stayed editable through Details and Payment; an order
        // with no lines must not settle.
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.processing = true;
        Ok(SettlementRequest {
            amount: cart.total(),
            card_tail: self.form.card_tail(),
        })
    }

    /// Apply a settlement outcome.
    ///
    /// Approval advances to Confirmation; decline and timeout leave the
    /// flow at Payment for another attempt. Either way the in-flight flag
    /// clears.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NoSettlementInFlight`] if nothing was begun,
    /// [`CheckoutError::Declined`] or [`CheckoutError::SettlementTimedOut`]
    /// for the corresponding outcomes.
    pub fn complete_settlement(
        &mut self,
        outcome: SettlementOutcome,
    ) -> Result<OrderId, CheckoutError> {
        if !self.processing {
            return Err(CheckoutError::NoSettlementInFlight);
        }
        self.processing = false;

        match outcome {
            SettlementOutcome::Approved { order_id } => {
                tracing::info!(%order_id, "Order placed");
                self.order_id = Some(order_id);
                self.step = Some(CheckoutStep::Confirmation);
                Ok(order_id)
            }
            SettlementOutcome::Declined { reason } => {
                tracing::warn!(%reason, "Settlement declined");
                Err(CheckoutError::Declined { reason })
            }
            SettlementOutcome::TimedOut => {
                tracing::warn!("Settlement timed out");
                Err(CheckoutError::SettlementTimedOut)
            }
        }
    }

    /// Submit the Payment step: begin a settlement, run it through the
    /// gateway, and apply the outcome. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// Everything [`Self::begin_settlement`] and
    /// [`Self::complete_settlement`] can return.
    pub async fn submit_payment<G: SettlementGateway>(
        &mut self,
        cart: &Cart,
        gateway: &G,
    ) -> Result<OrderId, CheckoutError> {
        let request = self.begin_settlement(cart)?;
        let outcome = gateway.settle(&request).await;
        self.complete_settlement(outcome)
    }

    /// Return from Payment to Details. Entered values persist.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::AlreadyProcessing`] while a settlement is in
    /// flight, or a step error if checkout is not at Payment.
    pub fn back_to_details(&mut self) -> Result<(), CheckoutError> {
        if self.processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        self.require_step(CheckoutStep::Payment)?;
        tracing::info!("Back to shipping details");
        self.step = Some(CheckoutStep::Details);
        Ok(())
    }

    /// Abandon checkout from Details.
    ///
    /// Non-destructive: the cart and form are untouched, and a later
    /// [`Self::open`] resumes with the same form.
    ///
    /// # Errors
    ///
    /// A step error if checkout is not at Details.
    pub fn close(&mut self) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Details)?;
        tracing::info!("Checkout closed");
        self.step = None;
        Ok(())
    }

    /// Finish from Confirmation: clear the cart, blank the form, forget
    /// the order ID, and close. The single destructive transition.
    ///
    /// # Errors
    ///
    /// A step error if checkout is not at Confirmation.
    pub fn continue_shopping(&mut self, cart: &mut Cart) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Confirmation)?;
        tracing::info!("Checkout reset, back to browsing");
        cart.clear();
        self.form.reset();
        self.order_id = None;
        self.step = None;
        Ok(())
    }

    fn require_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        match self.step {
            None => Err(CheckoutError::NotOpen),
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(CheckoutError::WrongStep { expected, actual }),
        }
    }
}
