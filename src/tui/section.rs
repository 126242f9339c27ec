//! Section - the panel's two-valued selector

use serde::Serialize;

use super::theme::icons;

/// Which collaborator the panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Portfolio manager - selected on first render
    #[default]
    Portfolio,
    /// Multilingual AI assistant
    Ai,
}

impl Section {
    /// Control order, left to right (top to bottom when collapsed)
    pub const ALL: [Section; 2] = [Section::Portfolio, Section::Ai];

    /// Label shown on the expanded tab
    pub fn label(&self) -> &'static str {
        match self {
            Section::Portfolio => "Portfolio",
            Section::Ai => "AI Assistant",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Portfolio => icons::PORTFOLIO,
            Section::Ai => icons::ASSISTANT,
        }
    }

    /// Position in [`Section::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Section::Portfolio => 0,
            Section::Ai => 1,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Portfolio => write!(f, "portfolio"),
            Section::Ai => write!(f, "ai"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_portfolio() {
        assert_eq!(Section::default(), Section::Portfolio);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Section::Portfolio.label(), "Portfolio");
        assert_eq!(Section::Ai.label(), "AI Assistant");
        assert_eq!(Section::Ai.to_string(), "ai");
    }
}
