//! Registration gateway port - the remote account registration service

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{RegistrationRequest, RegistrationResponse};

/// Remote service that records new accounts
///
/// A reported failure (`success: false`) is returned as `Ok` so callers can
/// show the gateway's own message. `Err` is reserved for transport problems.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationResponse>;
}
