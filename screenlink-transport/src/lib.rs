//! Transport layer for the tally screen
//!
//! Provides HTTP communication with the device endpoint.

pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::HttpTransport;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

/// Response to a device request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Raw response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if the device accepted the request
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Transport trait for device communication
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST form fields to a path on the device (bounded by `timeout`)
    async fn post_form(
        &self,
        path: &str,
        form: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse>;

    /// Get remote address
    fn remote_addr(&self) -> String;
}
