//! HTTP client for the registration gateway
//!
//! Talks to `POST {base_url}/api/register`. The gateway answers with the same
//! `{success, message}` body for 200, 400 and 500, so the body is decoded
//! regardless of status. There is no retry: a resubmitted form after a
//! timeout may register the same person twice.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::{RegistrationRequest, RegistrationResponse};
use crate::ports::RegistrationGateway;

const REGISTER_PATH: &str = "api/register";

#[derive(Debug, Clone)]
pub struct HttpRegistrationGateway {
    client: Client,
    endpoint: Url,
}

impl HttpRegistrationGateway {
    /// Create a client for the gateway at `base_url` (e.g. `http://localhost:5000`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid gateway URL '{}': {}", base_url, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Gateway URL must use http or https: {}",
                base_url
            )));
        }

        // Keep any path prefix: "http://host/eco" -> "http://host/eco/api/register"
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(REGISTER_PATH)
            .map_err(|e| Error::Config(format!("Invalid gateway URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationResponse> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            // Transport failures carry no gateway message; callers substitute
            // their own localized text for an empty one.
            .map_err(|_| Error::gateway(""))?;

        response
            .json::<RegistrationResponse>()
            .await
            .map_err(|_| Error::gateway(""))
    }
}
