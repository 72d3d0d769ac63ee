//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wire contract error: {0}")]
    Core(#[from] screenlink_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] screenlink_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] screenlink_types::Error),

    #[error("Device returned HTTP {0}")]
    DeviceStatus(u16),
}
