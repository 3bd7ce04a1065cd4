pub type BenchResult<T> = Result<T, BenchError>;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// Invalid stream metadata, motion profile, catalog entry or job list.
    ///
    /// Always raised before any frame of the affected video is processed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Source unreadable, output unwritable, or a sink/source used out of contract.
    #[error("stream error: {0}")]
    Stream(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BenchError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors that are raised before any frame is processed.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
