pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown column alias: {0:?}")]
    UnknownAlias(String),

    #[error("Unknown column code: {0}")]
    UnknownTargetCode(u8),

    #[error("Unknown direction code: {0}")]
    UnknownDirectionCode(u8),
}
