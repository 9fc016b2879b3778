//! Domain models for the payment service.

pub mod notification;
pub mod payment;

pub use notification::NotificationChannel;
pub use payment::{DEFAULT_PAYMENT_AMOUNT, Payment, PaymentId};
