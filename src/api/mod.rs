//! HTTP client for the registration endpoint

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
