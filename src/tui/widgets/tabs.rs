//! TabBar Widget
//!
//! Tab strip used for the panel's section controls.
//!
//! # Features
//!
//! - Horizontal (expanded) or vertical (collapsed rail) layout
//! - Icon + label, or icon-only
//! - Active tab drawn in brackets with the active style
//! - `layout()` exposes the exact cell of every tab for mouse hit-testing

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

/// Drawn between horizontal tabs
const SEPARATOR: &str = " │ ";

/// One tab: an icon and a label
#[derive(Debug, Clone, Copy)]
pub struct Tab<'a> {
    pub icon: &'a str,
    pub label: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Tab bar widget
pub struct TabBar<'a> {
    /// Tabs in display order
    tabs: Vec<Tab<'a>>,
    /// Currently selected tab index
    selected: usize,
    /// Style for inactive tabs
    inactive_style: Style,
    /// Style for active tab
    active_style: Style,
    /// Drop labels, keep icons
    icons_only: bool,
    orientation: Orientation,
}

impl<'a> TabBar<'a> {
    /// Create a new horizontal TabBar
    pub fn new(tabs: Vec<Tab<'a>>, selected: usize) -> Self {
        Self {
            tabs,
            selected,
            inactive_style: Style::default().fg(Color::DarkGray),
            active_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            icons_only: false,
            orientation: Orientation::Horizontal,
        }
    }

    /// Set the inactive tab style
    pub fn inactive_style(mut self, style: Style) -> Self {
        self.inactive_style = style;
        self
    }

    /// Set the active tab style
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    pub fn icons_only(mut self, icons_only: bool) -> Self {
        self.icons_only = icons_only;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Text drawn for tab `i`
    fn tab_text(&self, i: usize) -> String {
        let tab = &self.tabs[i];
        let body = if self.icons_only {
            tab.icon.to_string()
        } else {
            format!("{} {}", tab.icon, tab.label)
        };

        let is_active = i == self.selected;
        if is_active {
            format!("[{}]", body)
        } else if self.orientation == Orientation::Vertical {
            // Keep the rail aligned with the bracketed entry
            format!(" {} ", body)
        } else {
            body
        }
    }

    /// Cell occupied by each tab inside `area`, clipped to it.
    ///
    /// A tab that does not fit gets a zero-width rect so indices stay aligned.
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        let mut cells = Vec::with_capacity(self.tabs.len());
        if area.width == 0 || area.height == 0 {
            cells.resize(self.tabs.len(), Rect::new(area.x, area.y, 0, 0));
            return cells;
        }

        match self.orientation {
            Orientation::Horizontal => {
                let sep_width = Span::raw(SEPARATOR).width() as u16;
                let right = area.right();
                let mut x = area.x;
                for i in 0..self.tabs.len() {
                    if i > 0 {
                        x = x.saturating_add(sep_width);
                    }
                    let width = Span::raw(self.tab_text(i)).width() as u16;
                    let start = x.min(right);
                    let visible = width.min(right - start);
                    cells.push(Rect::new(start, area.y, visible, 1));
                    x = x.saturating_add(width);
                }
            }
            Orientation::Vertical => {
                for i in 0..self.tabs.len() {
                    let y = area.y.saturating_add(i as u16);
                    if y >= area.bottom() {
                        cells.push(Rect::new(area.x, area.bottom(), 0, 0));
                        continue;
                    }
                    let width = Span::raw(self.tab_text(i)).width() as u16;
                    cells.push(Rect::new(area.x, y, width.min(area.width), 1));
                }
            }
        }

        cells
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.tabs.is_empty() {
            return;
        }

        let cells = self.layout(area);
        for (i, cell) in cells.iter().enumerate() {
            if cell.width == 0 {
                continue;
            }

            // Separator before non-first horizontal tabs
            if i > 0 && self.orientation == Orientation::Horizontal {
                let prev = cells[i - 1];
                let gap = cell.x.saturating_sub(prev.right());
                if gap > 0 {
                    buf.set_stringn(
                        prev.right(),
                        area.y,
                        SEPARATOR,
                        gap as usize,
                        self.inactive_style,
                    );
                }
            }

            let style = if i == self.selected {
                self.active_style
            } else {
                self.inactive_style
            };
            buf.set_stringn(cell.x, cell.y, self.tab_text(i), cell.width as usize, style);
        }
    }
}
