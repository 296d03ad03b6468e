//! Client for the Adyen payment API.
//!
//! Two endpoint families are supported:
//!
//! - the backend API (`Payment` and `Recurring` services): JSON over authenticated `POST`
//! - the hosted payment page (HPP): query strings over `GET`, signed with the skin's HMAC key
//!
//! ```no_run
//! use adyen_client::{model::Amount, modification::Capture, Adyen, Environment};
//!
//! # async fn demo() -> Result<(), adyen_client::AdyenError> {
//! let mut adyen = Adyen::new(Environment::Testing, "ws@Company.Acme", "password")?;
//! adyen.set_merchant_account("AcmeCOM");
//!
//! let capture = Capture {
//!     merchant_account: adyen.merchant_account().to_string(),
//!     modification_amount: Amount::new(adyen.currency(), 1000),
//!     original_reference: "8313547924770610".into(),
//!     reference: "order-1".into(),
//! };
//! let result = adyen.modification().capture(&capture).await?;
//! println!("{}", result.response);
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate tracing;

mod client;
mod config;
mod credentials;
mod environment;
mod error;
mod protocol;
mod response;

pub mod hpp;
pub mod model;
pub mod modification;
pub mod payment;
pub mod recurring;
pub mod signature;

pub use client::{Adyen, AdyenBuilder, AdyenOptions};
pub use config::AdyenConfig;
pub use credentials::Credentials;
pub use environment::Environment;
pub use error::AdyenError;
pub use response::{ApiError, Response};

/// Currency used when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Version path segment of the backend API.
pub const API_VERSION: &str = "v25";

pub const PAYMENT_SERVICE: &str = "Payment";
pub const RECURRING_SERVICE: &str = "Recurring";
