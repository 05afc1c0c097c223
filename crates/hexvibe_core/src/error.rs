use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexVibeError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("unknown harmony rule: {0}")]
    UnknownHarmony(String),

    #[error("unknown appearance: {0} (expected light or dark)")]
    UnknownAppearance(String),

    #[error("slot {index} out of range (palette has {len} slots)")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("an AI palette request is already in progress")]
    AiBusy,

    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("saved palette not found: {0}")]
    PaletteNotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HexVibeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hex_error() {
        let err = HexVibeError::InvalidHex("#GGGGGG".to_string());
        assert_eq!(err.to_string(), "invalid hex color: #GGGGGG");
    }

    #[test]
    fn test_slot_out_of_range_error() {
        let err = HexVibeError::SlotOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "slot 7 out of range (palette has 5 slots)");
    }

    #[test]
    fn test_ai_busy_error() {
        let err = HexVibeError::AiBusy;
        assert!(err.to_string().contains("already in progress"));
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = HexVibeError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        let err = HexVibeError::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
