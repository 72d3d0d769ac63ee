//! HTTP transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, trace};

use crate::{error::*, HttpResponse, Transport};

/// HTTP transport for the device's web endpoint.
///
/// Stateless: every request is an independent POST bounded by the timeout
/// the caller passes in. There is no connection to hold open and no retry.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for a device address.
    ///
    /// `addr` may be a bare host, a `host:port` pair, or a full
    /// `http://` URL. Bare forms get the `http://` scheme prepended.
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&addr.into()),
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| Error::InvalidAddress(format!("{raw}: {e}")))
    }
}

/// Prefix bare addresses with the http scheme and strip trailing slashes.
fn normalize_base(addr: &str) -> String {
    let trimmed = addr.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

fn classify(e: reqwest::Error, timeout: Duration) -> Error {
    if e.is_timeout() {
        Error::Timeout(timeout)
    } else if e.is_connect() {
        Error::Connect(e.to_string())
    } else {
        Error::Http(e)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        path: &str,
        form: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse> {
        let url = self.endpoint(path)?;

        trace!("POST {} ({} form fields)", url, form.len());

        let response = self
            .client
            .post(url.clone())
            .form(form)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| classify(e, timeout))?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }

    fn remote_addr(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};

    use super::*;

    #[test]
    fn test_base_normalization() {
        assert_eq!(
            HttpTransport::new("10.64.220.72").remote_addr(),
            "http://10.64.220.72"
        );
        assert_eq!(
            HttpTransport::new("10.64.220.72:8080/").remote_addr(),
            "http://10.64.220.72:8080"
        );
        assert_eq!(
            HttpTransport::new("http://camera.local").remote_addr(),
            "http://camera.local"
        );
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let transport = HttpTransport::new("not a host");
        let result = transport
            .post_form("/screen", &[], Duration::from_millis(100))
            .await;

        assert!(matches!(result, Err(Error::InvalidAddress(_))));
    }

    async fn spawn_endpoint(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("127.0.0.1:{}", addr.port())
    }

    #[tokio::test]
    async fn test_post_form_success() {
        let router = Router::new().route("/screen", post(|| async { "ok" }));
        let addr = spawn_endpoint(router).await;

        let transport = HttpTransport::new(addr);
        let form = vec![("data".to_string(), "0".to_string())];
        let response = transport
            .post_form("/screen", &form, Duration::from_secs(1))
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(&response.body[..], b"ok");
    }

    #[tokio::test]
    async fn test_post_form_timeout() {
        let router = Router::new().route(
            "/screen",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let addr = spawn_endpoint(router).await;

        let transport = HttpTransport::new(addr);
        let result = transport
            .post_form("/screen", &[], Duration::from_millis(100))
            .await;

        assert!(matches!(result, Err(Error::Timeout(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port with no listener behind it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());
        drop(listener);

        let transport = HttpTransport::new(addr);
        let result = transport
            .post_form("/screen", &[], Duration::from_secs(1))
            .await;

        assert!(matches!(result, Err(Error::Connect(_))));
    }
}
