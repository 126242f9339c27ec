//! Error types with fix suggestions
//!
//! The panel itself never fails. Everything here belongs to the binary
//! surface: config loading, terminal setup and headless rendering.

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Config errors
    // ─────────────────────────────────────────────────────────────
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid config: {details}")]
    InvalidConfig { details: String },

    // ─────────────────────────────────────────────────────────────
    // Terminal errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {reason}")]
    Terminal { reason: String },

    #[error("Invalid render size {width}x{height}")]
    InvalidSize { width: u16, height: u16 },

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FixSuggestion for PanelError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            PanelError::Io(_) => None,
            PanelError::ConfigNotFound { .. } => {
                Some("Check the --config path, or omit it to use built-in defaults")
            }
            PanelError::ConfigParse(_) => Some("Check YAML syntax: indentation and field names"),
            PanelError::InvalidConfig { .. } => {
                Some("Run `portfolio-panel check-config <file>` to see every problem")
            }
            PanelError::Terminal { .. } => {
                Some("Run inside an interactive terminal, or use `portfolio-panel render`")
            }
            PanelError::InvalidSize { .. } => Some("Width must be at least 8 and height at least 4"),
            PanelError::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
