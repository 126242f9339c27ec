//! portfolio-panel - terminal panel switching between a portfolio view and
//! a multilingual AI assistant

pub mod config;
pub mod error;
pub mod tui;

pub use config::{Holding, Language, PanelConfig};
pub use error::{FixSuggestion, PanelError, Result};
pub use tui::{PanelProps, PortfolioPanel, Section};
