//! Counter report parsing

use screenlink_types::CounterSnapshot;

use crate::error::Result;

/// Parse the JSON counter report the device returns on a successful update.
///
/// Extra fields are ignored; missing fields or a non-JSON body are a
/// [`MalformedReport`](crate::Error::MalformedReport) error.
pub fn parse_snapshot(body: &[u8]) -> Result<CounterSnapshot> {
    Ok(serde_json::from_slice(body)?)
}
