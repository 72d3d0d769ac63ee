//! Adjustment payload encoding
//!
//! The firmware expects a form-encoded body with two fields:
//! `data` selects the column (0=left, 1=right, 2=both) and `status`
//! selects the direction (0=increment, 1=decrement).

use screenlink_types::{Direction, TargetSelector};

use crate::error::Result;

/// One counter adjustment, in wire form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AdjustPayload {
    /// Column code (`data` field)
    pub data: u8,

    /// Direction code (`status` field)
    pub status: u8,
}

impl AdjustPayload {
    /// Encode a typed adjustment
    pub fn new(target: TargetSelector, direction: Direction) -> Self {
        Self {
            data: target.code(),
            status: direction.code(),
        }
    }

    /// Recover the typed pair from the raw codes
    pub fn decode(self) -> Result<(TargetSelector, Direction)> {
        let target = TargetSelector::try_from(self.data)?;
        let direction = Direction::try_from(self.status)?;
        Ok((target, direction))
    }

    /// Form fields for the POST body
    pub fn to_form(self) -> Vec<(String, String)> {
        vec![
            ("data".to_string(), self.data.to_string()),
            ("status".to_string(), self.status.to_string()),
        ]
    }
}
