use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },

    #[error("cannot parse `{token}` at position {position}")]
    Parse { token: String, position: usize },

    #[error("input is empty")]
    EmptyInput,

    #[error("unknown command: {0} (try /help)")]
    UnknownCommand(String),

    #[error("nothing to export yet, draw a tree, spiral or factorial first")]
    NothingToExport,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExplorerError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ExplorerError::InvalidArgument { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
