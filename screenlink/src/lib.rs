//! # screenlink
//!
//! Client for ESP32-CAM devices that render three tally counters
//! ("left", "right", "both") on an attached OLED screen.
//!
//! ## Features
//!
//! - Typed counter adjustments over the device's `/screen` endpoint
//! - Async API using Tokio
//! - Cached last-known counter state
//! - Pluggable transport for testing against mock endpoints
//!
//! ## Quick Start
//!
//! ```no_run
//! use screenlink::ScreenClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut client = ScreenClient::new("10.64.220.72");
//!
//!     // Bump the left tally; failures are logged and reported as false
//!     if client.increment_left().await {
//!         println!("screen now shows: {}", client.snapshot());
//!     }
//! }
//! ```

pub mod client;
pub mod error;

// Re-exports
pub use client::ScreenClient;
pub use error::{Error, Result};

// Re-export types
pub use screenlink_core::{AdjustPayload, SCREEN_PATH};
pub use screenlink_transport::{HttpTransport, Transport};
pub use screenlink_types::{CounterSnapshot, Direction, TargetSelector};
