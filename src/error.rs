use thiserror::Error;

/// Errors raised while building a palette catalog or generating an avatar.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("unknown vibe '{name}' (available: {})", available.join(", "))]
    UnknownVibe { name: String, available: Vec<String> },

    #[error("palette catalog must contain at least one vibe")]
    EmptyCatalog,

    #[error("vibe '{name}' has no colors")]
    EmptyPalette { name: String },

    #[error("vibe '{name}' has {actual} colors, expected {expected}")]
    PaletteLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("vibe '{name}' is defined more than once")]
    DuplicateVibe { name: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AvatarError>;
