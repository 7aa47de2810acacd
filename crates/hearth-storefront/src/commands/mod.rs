//! # Actions Module
//!
//! The storefront actions a display layer invokes. Each action is a plain
//! function over the session's state containers; responses are the
//! serializable shapes the display layer renders.

pub mod cart;
pub mod checkout;
pub mod product;
pub mod wishlist;

pub use cart::CartResponse;
pub use checkout::{
    CustomerInfo, OrderConfirmation, OrderLine, OrderRequest, OrderSummary, PaymentDetails,
    ShippingAddress,
};
pub use wishlist::WishlistResponse;
