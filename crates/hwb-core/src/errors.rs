/// Core error type for the watcher.
///
/// Adapter crates map their specific errors into this type so the poll loop
/// can handle every failure the same way: log the cycle, keep running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("response shape error: {0}")]
    Shape(String),

    #[error("undocumented homework status: {0}")]
    UnknownStatus(String),

    #[error("delivery error: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
