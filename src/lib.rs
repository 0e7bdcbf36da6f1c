//! Typed Rust client for the GenderAPI phone number validation API.
//!
//! The crate has a domain layer of strong types (no I/O), a transport layer for the JSON
//! wire format, and a small client layer that sends one `POST /api/phone` per call.
//!
//! ```rust,no_run
//! use phone_validator::PhoneValidatorClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), phone_validator::PhoneValidatorError> {
//!     let client = PhoneValidatorClient::new("your_api_key")?;
//!     let result = client.validate("+1 212 867 5309", "US").await?;
//!     println!("{:?}", result.e164());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, PhoneValidatorClient, PhoneValidatorClientBuilder, PhoneValidatorError,
};
pub use domain::{
    AddressHint, ApiKey, PhoneNumberInput, ValidatePhone, ValidationError, ValidationResult,
};
