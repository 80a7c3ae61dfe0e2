use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryplanError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown tone: {0}")]
    UnknownTone(String),

    #[error("unknown pacing: {0}")]
    UnknownPacing(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoryplanError>;
