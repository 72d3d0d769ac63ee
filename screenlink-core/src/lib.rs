//! # screenlink-core
//!
//! Wire contract for the tally screen endpoint.
//!
//! This crate provides the low-level protocol pieces:
//! - Adjustment payload encoding (form fields)
//! - Counter report parsing (JSON body)
//! - Endpoint constants

pub mod error;
pub mod payload;
pub mod response;

pub use error::{Error, Result};
pub use payload::AdjustPayload;
pub use response::parse_snapshot;

use std::time::Duration;

/// Endpoint path exposed by the device firmware
pub const SCREEN_PATH: &str = "/screen";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
