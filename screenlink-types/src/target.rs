//! Tally column selection

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which tally column an adjustment applies to.
///
/// The firmware addresses columns numerically; [`code`](Self::code) is the
/// value sent in the `data` form field. Textual lookup accepts the English
/// names and the Turkish labels printed on the deployed units
/// ("sol", "sag"/"sağ", "ikisi").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TargetSelector {
    Left = 0,
    Right = 1,
    Both = 2,
}

impl TargetSelector {
    /// Wire code carried in the `data` form field
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolve a textual alias, case-insensitively.
    ///
    /// Unknown strings resolve to `Left`. The deployed tooling has always
    /// behaved this way and callers rely on it; use the strict [`FromStr`]
    /// impl when unknown input should be rejected instead.
    pub fn from_alias(alias: &str) -> Self {
        alias.parse().unwrap_or(Self::Left)
    }

    /// Get column name
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }
}

impl From<TargetSelector> for u8 {
    fn from(target: TargetSelector) -> u8 {
        target as u8
    }
}

impl TryFrom<u8> for TargetSelector {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Both),
            _ => Err(Error::UnknownTargetCode(value)),
        }
    }
}

impl FromStr for TargetSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "sol" => Ok(Self::Left),
            "right" | "sag" | "sağ" => Ok(Self::Right),
            "both" | "ikisi" => Ok(Self::Both),
            other => Err(Error::UnknownAlias(other.to_string())),
        }
    }
}

impl fmt::Display for TargetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
