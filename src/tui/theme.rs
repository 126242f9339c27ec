//! Panel Theme - Visual Design System
//!
//! Violet + amber palette with teal highlights for the active control.

use ratatui::style::{Color, Modifier, Style};

/// Panel color palette
pub struct PanelTheme {
    // Primary palette
    pub space_violet: Color,
    pub amber_gold: Color,
    pub cyan_teal: Color,
    pub star_white: Color,

    // Status colors
    pub success_green: Color,
    pub error_red: Color,

    // Dimmed versions
    pub dim_violet: Color,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            space_violet: Color::Rgb(138, 43, 226), // #8A2BE2
            amber_gold: Color::Rgb(255, 191, 0),    // #FFBF00
            cyan_teal: Color::Rgb(0, 255, 255),     // #00FFFF
            star_white: Color::Rgb(230, 237, 243),  // #E6EDF3

            success_green: Color::Rgb(63, 185, 80), // #3FB950
            error_red: Color::Rgb(248, 81, 73),     // #F85149

            dim_violet: Color::Rgb(88, 28, 143),
        }
    }
}

impl PanelTheme {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Styles
    // ─────────────────────────────────────────────────────────────────────

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.star_white)
    }

    /// Dimmed text style
    pub fn dimmed(&self) -> Style {
        Style::default().fg(Color::Rgb(128, 128, 128))
    }

    /// Bold header style
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.space_violet)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent style (amber)
    pub fn accent(&self) -> Style {
        Style::default().fg(self.amber_gold)
    }

    /// Pressed control / selected row
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.cyan_teal)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success_green)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error_red)
    }

    /// Panel border
    pub fn border(&self) -> Style {
        Style::default().fg(self.dim_violet)
    }

    /// Green for gains, red for losses
    pub fn gain_style(&self, value: f64) -> Style {
        if value < 0.0 {
            self.error()
        } else {
            self.success()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Icons
// ─────────────────────────────────────────────────────────────────────────────

/// Single-cell glyphs so control hit areas stay one column per icon
pub mod icons {
    pub const PORTFOLIO: &str = "◈";
    pub const ASSISTANT: &str = "✦";

    // Chat roles
    pub const USER: &str = "›";
    pub const BOT: &str = "✦";
    pub const SYSTEM: &str = "·";

    pub const CURSOR: &str = "▏";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_style() {
        let theme = PanelTheme::new();
        assert_eq!(theme.gain_style(-1.0).fg, Some(theme.error_red));
        assert_eq!(theme.gain_style(0.0).fg, Some(theme.success_green));
    }

    #[test]
    fn test_highlight_is_bold() {
        let theme = PanelTheme::new();
        assert!(theme.highlight().add_modifier.contains(Modifier::BOLD));
    }
}
