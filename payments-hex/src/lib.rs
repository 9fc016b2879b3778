//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the payments service.
//!
//! ## Architecture
//!
//! - `validator/` - Request validation stages
//! - `service/` - Application service (validate → persist → notify)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document for the HTTP surface
//!
//! The service is generic over `R: PaymentRepository` and `N: Notifier`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;
pub mod validator;


pub use service::PaymentService;
pub use validator::PaymentValidator;
