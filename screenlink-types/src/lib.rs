//! Type definitions for screenlink

pub mod counters;
pub mod direction;
pub mod error;
pub mod target;

pub use counters::CounterSnapshot;
pub use direction::Direction;
pub use error::{Error, Result};
pub use target::TargetSelector;
