//! # Checkout Actions
//!
//! Order summary and simulated order submission.
//!
//! There is no payment processor behind this module. Submission validates
//! the form input, pauses for a fixed delay that stands in for network
//! latency, then confirms the order and clears the cart. Everything else
//! about a real order lifecycle (capture, fulfilment, email) is outside
//! this repository.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Flow                                   │
//! │                                                                     │
//! │  order_summary() ──► lines, subtotal, shipping, total               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  submit_order(request)                                              │
//! │       │                                                             │
//! │       ├── cart empty? ─────────► CHECKOUT_ERROR                     │
//! │       ├── input invalid? ──────► VALIDATION_ERROR                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  simulated processing delay (2 s)                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  clear cart (persists empty snapshot) ──► OrderConfirmation         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::CartStore;
use hearth_core::validation::{
    validate_card_number, validate_digits, validate_email, validate_required,
};
use hearth_core::{CoreError, Money, ValidationError, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD};

/// Fixed simulated payment-processing pause.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Request Types
// =============================================================================

/// Shopper contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Delivery address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    /// Optional on the form.
    #[serde(default)]
    pub postal_code: String,
}

/// Payment method details, tagged by method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum PaymentDetails {
    /// Card payment on a simulated terminal.
    #[serde(rename_all = "camelCase")]
    Card {
        card_number: String,
        card_name: String,
        expiry: String,
        cvv: String,
    },
    /// Mobile money transfer.
    #[serde(rename_all = "camelCase")]
    MobileMoney { provider: String, number: String },
    /// Direct bank transfer.
    #[serde(rename_all = "camelCase")]
    BankTransfer {
        bank_name: String,
        account_number: String,
    },
}

/// A complete order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer: CustomerInfo,
    pub shipping: ShippingAddress,
    pub payment: PaymentDetails,
}

// =============================================================================
// Response Types
// =============================================================================

/// One line of the order summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
    pub line_total: Money,
}

/// Totals shown on the review step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

/// Confirmation returned after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub order_number: String,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Actions
// =============================================================================

/// Shipping charge for a given subtotal: free strictly above the
/// threshold, flat rate otherwise.
pub fn shipping_for(subtotal: Money) -> Money {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        FLAT_SHIPPING_RATE
    }
}

/// Builds the review-step summary from the current cart.
pub fn order_summary(store: &CartStore) -> OrderSummary {
    let items = store.items();

    let lines: Vec<OrderLine> = items
        .iter()
        .map(|item| OrderLine {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        })
        .collect();

    let subtotal: Money = items.iter().map(|i| i.line_total()).sum();
    let shipping = shipping_for(subtotal);

    debug!(lines = lines.len(), subtotal = %subtotal, shipping = %shipping, "Order summary");

    OrderSummary {
        lines,
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}

/// Submits an order against the current cart.
///
/// ## Behavior
/// 1. Rejects an empty cart
/// 2. Validates contact, shipping, and payment fields
/// 3. Pauses for [`PROCESSING_DELAY`] (simulated payment latency)
/// 4. Clears the cart, which persists the empty snapshot
/// 5. Returns the confirmation
///
/// Totals are computed before the pause and are what the shopper
/// reviewed; the cart cannot change mid-submission in the
/// single-threaded dispatch this models.
pub async fn submit_order(
    store: &CartStore,
    request: OrderRequest,
) -> Result<OrderConfirmation, ApiError> {
    let summary = order_summary(store);
    if summary.lines.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    validate_request(&request)?;

    info!(total = %summary.total, lines = summary.lines.len(), "Processing order");
    tokio::time::sleep(PROCESSING_DELAY).await;

    let order_id = Uuid::new_v4().to_string();
    let order_number = generate_order_number();

    store.clear();

    info!(order_id = %order_id, order_number = %order_number, "Order placed");

    Ok(OrderConfirmation {
        order_id,
        order_number,
        subtotal: summary.subtotal,
        shipping: summary.shipping,
        total: summary.total,
        placed_at: Utc::now(),
    })
}

/// Validates every field of an order request.
fn validate_request(request: &OrderRequest) -> Result<(), ValidationError> {
    validate_required("first name", &request.customer.first_name)?;
    validate_required("last name", &request.customer.last_name)?;
    validate_email(&request.customer.email)?;
    validate_required("phone", &request.customer.phone)?;

    validate_required("address", &request.shipping.address)?;
    validate_required("city", &request.shipping.city)?;

    match &request.payment {
        PaymentDetails::Card {
            card_number,
            card_name,
            expiry,
            cvv,
        } => {
            validate_card_number(card_number)?;
            validate_required("cardholder name", card_name)?;
            validate_required("expiry", expiry)?;
            validate_digits("cvv", cvv, 3, 4)?;
        }
        PaymentDetails::MobileMoney { provider, number } => {
            validate_required("mobile provider", provider)?;
            validate_required("mobile number", number)?;
        }
        PaymentDetails::BankTransfer {
            bank_name,
            account_number,
        } => {
            validate_required("bank name", bank_name)?;
            validate_digits("account number", account_number, 6, 20)?;
        }
    }

    Ok(())
}

/// Generates a human-readable order number: date stamp plus a
/// nanosecond-derived suffix.
fn generate_order_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let random: u16 = (nanos % 10000) as u16;
    format!("HW-{}-{:04}", now.format("%y%m%d"), random)
}

// =============================================================================
// Unit Tests
// =============================================================================
