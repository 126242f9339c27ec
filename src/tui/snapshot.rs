//! Headless rendering
//!
//! Draws one frame into an in-memory backend and reports what a screen
//! reader would see: the text rows, the controls and their pressed state.

use ratatui::{backend::TestBackend, buffer::Buffer, text::Span, Terminal};
use serde::Serialize;

use super::panel::{PanelProps, PortfolioPanel};
use super::section::Section;
use super::theme::PanelTheme;
use crate::error::{PanelError, Result};

pub const MIN_WIDTH: u16 = 8;
pub const MIN_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlSnapshot {
    pub section: Section,
    pub icon: &'static str,
    pub label: Option<&'static str>,
    pub pressed: bool,
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelSnapshot {
    pub collapsed: bool,
    pub selected: Section,
    pub mounted: Option<Section>,
    pub controls: Vec<ControlSnapshot>,
    #[serde(skip)]
    pub lines: Vec<String>,
}

impl PanelSnapshot {
    /// Screen text, trailing blanks trimmed
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Render `panel` once at `width` x `height`
pub fn render_snapshot(
    panel: &mut PortfolioPanel,
    props: PanelProps,
    width: u16,
    height: u16,
) -> Result<PanelSnapshot> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(PanelError::InvalidSize { width, height });
    }

    let theme = PanelTheme::new();
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| {
        let area = frame.area();
        panel.render(frame, area, props, &theme);
    })?;

    let lines = buffer_lines(terminal.backend().buffer());
    let controls = panel
        .controls()
        .into_iter()
        .map(|c| ControlSnapshot {
            section: c.section,
            icon: c.icon,
            label: c.label,
            pressed: c.pressed,
            x: c.area.x,
            y: c.area.y,
            width: c.area.width,
        })
        .collect();

    Ok(PanelSnapshot {
        collapsed: props.collapsed,
        selected: panel.selected(),
        mounted: panel.mounted(),
        controls,
        lines,
    })
}

/// Buffer rows as strings, without the filler cells behind wide glyphs
fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width.max(1))
        .map(|row| {
            let mut line = String::with_capacity(width);
            let mut skip = 0usize;
            for cell in row {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                skip = Span::raw(symbol).width().saturating_sub(1);
                line.push_str(symbol);
            }
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use pretty_assertions::assert_eq;

    fn panel() -> PortfolioPanel {
        PortfolioPanel::from_config(&PanelConfig::default())
    }

    #[test]
    fn test_rejects_tiny_area() {
        let err = render_snapshot(&mut panel(), PanelProps::default(), 4, 2).unwrap_err();
        assert!(matches!(err, PanelError::InvalidSize { width: 4, height: 2 }));
    }

    #[test]
    fn test_expanded_snapshot() {
        let snap = render_snapshot(&mut panel(), PanelProps::default(), 80, 12).unwrap();
        assert_eq!(snap.selected, Section::Portfolio);
        assert_eq!(snap.mounted, Some(Section::Portfolio));
        assert_eq!(snap.lines.len(), 12);
        assert_eq!(snap.lines[1], "│[◈ Portfolio] │ ✦ AI Assistant                                                │");
        assert!(snap.text().contains("AAPL"));

        let pressed: Vec<bool> = snap.controls.iter().map(|c| c.pressed).collect();
        assert_eq!(pressed, vec![true, false]);
    }

    #[test]
    fn test_collapsed_snapshot() {
        let mut panel = panel();
        panel.select(Section::Ai);
        let props = PanelProps { collapsed: true };
        let snap = render_snapshot(&mut panel, props, 20, 6).unwrap();

        assert_eq!(snap.mounted, None);
        assert_eq!(snap.lines[1], "│ ◈                │");
        assert_eq!(snap.lines[2], "│[✦]               │");
        assert!(snap.controls.iter().all(|c| c.label.is_none()));
        assert!(snap.controls[1].pressed);
    }

    #[test]
    fn test_wide_glyphs_are_not_padded() {
        let mut config = PanelConfig::default();
        config.assistant.default_language = crate::config::Language::Ja;
        let mut panel = PortfolioPanel::from_config(&config);
        panel.select(Section::Ai);
        let snap = render_snapshot(&mut panel, PanelProps::default(), 80, 12).unwrap();
        assert!(snap.text().contains("ja · 日本語"));
    }

    #[test]
    fn test_json_shape() {
        let snap = render_snapshot(&mut panel(), PanelProps::default(), 40, 8).unwrap();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["selected"], "portfolio");
        assert_eq!(json["mounted"], "portfolio");
        assert_eq!(json["controls"][1]["section"], "ai");
        assert_eq!(json["controls"][1]["label"], "AI Assistant");
        assert!(json.get("lines").is_none());
    }
}
