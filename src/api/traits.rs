//! Trait abstraction for the registration client to enable mocking in tests

use super::ApiError;
use crate::state::{SubmittedUser, UserPayload};
use async_trait::async_trait;

/// Remote registration operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Post a new user and return the record the service created
    async fn create_user(&self, payload: &UserPayload) -> Result<SubmittedUser, ApiError>;
}
