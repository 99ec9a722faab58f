use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoftpipeError {
    /// A face names a vertex that does not exist, or the index list has a
    /// trailing partial face.
    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SoftpipeError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedGeometry(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SoftpipeError>;
