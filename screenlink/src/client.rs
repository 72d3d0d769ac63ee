//! High-level screen client

use std::time::Duration;

use tracing::{debug, warn};

use screenlink_core::{AdjustPayload, DEFAULT_TIMEOUT, SCREEN_PATH, parse_snapshot};
use screenlink_transport::{HttpTransport, Transport};
use screenlink_types::{CounterSnapshot, Direction, TargetSelector};

use crate::error::{Error, Result};

/// Tally screen client
///
/// Issues counter adjustments to the device and caches the counter report
/// it returns. The device owns the authoritative state; the cache is only
/// the last successfully observed values.
///
/// # Examples
///
/// ```no_run
/// use screenlink::{Direction, ScreenClient, TargetSelector};
///
/// #[tokio::main]
/// async fn main() {
///     let mut client = ScreenClient::new("10.64.220.72");
///
///     client.adjust(TargetSelector::Right, Direction::Increment).await;
///     println!("{}", client.snapshot());
/// }
/// ```
pub struct ScreenClient {
    transport: Box<dyn Transport>,
    timeout: Duration,
    last: Option<CounterSnapshot>,
}

impl ScreenClient {
    /// Create a client for a device address (HTTP transport)
    pub fn new(addr: impl Into<String>) -> Self {
        Self::with_transport(Box::new(HttpTransport::new(addr)))
    }

    /// Create a client over a custom transport
    ///
    /// Lets tests drive the client against a mock endpoint.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            timeout: DEFAULT_TIMEOUT,
            last: None,
        }
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adjust a counter and return the device's updated report.
    ///
    /// The cached snapshot is overwritten only when the device answers
    /// HTTP 200 with a parseable report.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request fails at the transport level (timeout, refused, DNS)
    /// - The device answers with a non-200 status
    /// - The response body is not a valid counter report
    pub async fn try_adjust(
        &mut self,
        target: TargetSelector,
        direction: Direction,
    ) -> Result<CounterSnapshot> {
        let payload = AdjustPayload::new(target, direction);

        debug!("Adjusting {} ({})", target, direction);

        let response = self
            .transport
            .post_form(SCREEN_PATH, &payload.to_form(), self.timeout)
            .await?;

        if !response.is_success() {
            return Err(Error::DeviceStatus(response.status));
        }

        let snapshot = parse_snapshot(&response.body)?;
        self.last = Some(snapshot);

        debug!("Device reports {}", snapshot);

        Ok(snapshot)
    }

    /// Adjust a counter, reporting failure as `false`.
    ///
    /// The fire-and-forget contract: any failure is logged and swallowed,
    /// and the cached snapshot is left untouched. Use
    /// [`try_adjust`](Self::try_adjust) to keep the failure reason.
    pub async fn adjust(&mut self, target: TargetSelector, direction: Direction) -> bool {
        match self.try_adjust(target, direction).await {
            Ok(_) => true,
            Err(e) => {
                warn!(
                    "Screen update failed ({}): {}",
                    self.transport.remote_addr(),
                    e
                );
                false
            }
        }
    }

    /// Adjust a counter named by a textual alias.
    ///
    /// Aliases resolve case-insensitively in English and Turkish; unknown
    /// names fall back to the left column (see
    /// [`TargetSelector::from_alias`]).
    pub async fn adjust_named(&mut self, target: &str, direction: Direction) -> bool {
        self.adjust(TargetSelector::from_alias(target), direction).await
    }

    /// Last reported counter values
    ///
    /// All zeros until the first successful adjustment. Use
    /// [`last_observed`](Self::last_observed) to tell the two apart.
    pub fn snapshot(&self) -> CounterSnapshot {
        self.last.unwrap_or_default()
    }

    /// Last report, if any adjustment has succeeded yet
    pub fn last_observed(&self) -> Option<CounterSnapshot> {
        self.last
    }

    /// Increment the left tally
    pub async fn increment_left(&mut self) -> bool {
        self.adjust(TargetSelector::Left, Direction::Increment).await
    }

    /// Decrement the left tally
    pub async fn decrement_left(&mut self) -> bool {
        self.adjust(TargetSelector::Left, Direction::Decrement).await
    }

    /// Increment the right tally
    pub async fn increment_right(&mut self) -> bool {
        self.adjust(TargetSelector::Right, Direction::Increment).await
    }

    /// Decrement the right tally
    pub async fn decrement_right(&mut self) -> bool {
        self.adjust(TargetSelector::Right, Direction::Decrement).await
    }

    /// Increment the shared tally
    pub async fn increment_both(&mut self) -> bool {
        self.adjust(TargetSelector::Both, Direction::Increment).await
    }

    /// Decrement the shared tally
    pub async fn decrement_both(&mut self) -> bool {
        self.adjust(TargetSelector::Both, Direction::Decrement).await
    }
}
