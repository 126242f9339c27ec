//! Built-in collaborators
//!
//! 1. **Portfolio** - holdings table with totals
//! 2. **AI Assistant** - multilingual chat with local replies

mod assistant;
mod portfolio;

pub use assistant::{ChatInterface, ChatMessage, MessageRole};
pub use portfolio::PortfolioManager;
