//! TUI Module - Portfolio / AI Assistant panel
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     SHELL (app.rs, events.rs)                       │
//! │  Owns `collapsed`. Terminal loop. Maps input to actions.            │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               │ select / click / keys
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        PANEL (panel.rs)                             │
//! │  Selector state. Mounts exactly one collaborator when expanded.     │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               │ MountPoint
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     COLLABORATORS (views/)                          │
//! │  Opaque child views: PortfolioManager, ChatInterface.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod collaborator;
mod events;
mod panel;
mod section;
mod snapshot;
mod theme;

pub mod views;
pub mod widgets;

pub use app::TuiApp;
pub use collaborator::{Collaborator, MountPoint};
pub use events::{handle_event, handle_key_event, Action};
pub use panel::{Control, PanelProps, PortfolioPanel};
pub use section::Section;
pub use snapshot::{render_snapshot, ControlSnapshot, PanelSnapshot};
pub use theme::{icons, PanelTheme};

use crate::config::PanelConfig;

/// Run the interactive panel
pub async fn run(config: &PanelConfig) -> crate::error::Result<()> {
    let app = TuiApp::new(config);
    app.run().await
}
