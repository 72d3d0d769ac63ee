//! Adjustment direction

use std::fmt;

use crate::error::{Error, Result};

/// Whether an adjustment increments or decrements the target column.
///
/// [`code`](Self::code) is the value sent in the `status` form field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Increment = 0,
    Decrement = 1,
}

impl Direction {
    /// Wire code carried in the `status` form field
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Increment),
            1 => Ok(Self::Decrement),
            _ => Err(Error::UnknownDirectionCode(value)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
