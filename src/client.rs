//! HTTP client for the doorbell's local REST API.
//!
//! Every capability action maps to exactly one request/response exchange.
//! The device answers 200 with a small JSON body on success and plain error
//! text otherwise; non-200 answers are soft failures carried back as values,
//! transport failures propagate as errors.

use crate::config::DeviceConfig;
use crate::error::{BridgeError, Result};
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Outcome of one HTTP exchange with the device.
#[derive(Debug, Clone)]
pub enum ExchangeOutcome {
    /// Device answered 200. The body is kept when it parses as JSON.
    Success { body: Option<Value> },
    /// Device answered with a non-200 status. The raw response text is the
    /// device's own error message; callers log it and move on.
    DeviceError { status: u16, message: String },
}

impl ExchangeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExchangeOutcome::Success { .. })
    }

    /// The device's error text, if this outcome is a soft failure.
    pub fn device_error(&self) -> Option<&str> {
        match self {
            ExchangeOutcome::DeviceError { message, .. } => Some(message),
            ExchangeOutcome::Success { .. } => None,
        }
    }
}

/// Issues single short-lived HTTP exchanges with a fixed auth header set.
///
/// The header set is fully determined by [`DeviceConfig`] at construction
/// time; there is no token refresh or host re-resolution afterwards.
pub struct DeviceClient {
    http: reqwest::Client,
    headers: HeaderMap,
}

impl DeviceClient {
    pub fn new(config: &DeviceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).map_err(|_| BridgeError::InvalidToken)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // One connection per exchange; the device closes sessions quickly
        // and keeping idle sockets to it is not useful.
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { http, headers })
    }

    /// Perform one exchange and report a normalized outcome.
    ///
    /// Status 200 is the only success status. Anything else comes back as
    /// [`ExchangeOutcome::DeviceError`] with the raw response text. Transport
    /// failures (refused connection, DNS, broken body stream) propagate.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<ExchangeOutcome> {
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url).headers(self.headers.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::OK {
            Ok(ExchangeOutcome::Success {
                body: serde_json::from_str(&text).ok(),
            })
        } else {
            debug!("Device returned {}: {}", status, text);
            Ok(ExchangeOutcome::DeviceError {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
