//! Order hand-off module.
//!
//! Turns a cart or a single product selection into a localized message and
//! wraps it in a WhatsApp deep link.

mod composer;
mod link;

pub use composer::{compose_cart_message, compose_inquiry_message};
pub use link::{OrderChannel, DEFAULT_WHATSAPP_NUMBER};
