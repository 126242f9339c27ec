//! PortfolioPanel - two-section switcher
//!
//! ```text
//!  expanded                                collapsed
//! ┌ ◈ Portfolio ─────────────────────┐    ┌───┐
//! │[◈ Portfolio] │ ✦ AI Assistant    │    │[◈]│
//! │──────────────────────────────────│    │ ✦ │
//! │ <mounted collaborator>           │    │   │
//! └──────────────────────────────────┘    └───┘
//! ```
//!
//! The selector survives collapsing. The mounted collaborator does not:
//! collapsing unmounts it and expanding mounts a fresh instance.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::collaborator::{Collaborator, MountPoint};
use super::section::Section;
use super::theme::PanelTheme;
use super::views::{ChatInterface, PortfolioManager};
use super::widgets::{Orientation, Tab, TabBar};
use crate::config::PanelConfig;

/// Inputs owned by the panel's container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelProps {
    pub collapsed: bool,
}

/// A rendered control, as seen by accessibility tooling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub section: Section,
    pub icon: &'static str,
    /// `None` for icon-only controls
    pub label: Option<&'static str>,
    pub area: Rect,
    pub pressed: bool,
}

struct Mounted {
    section: Section,
    view: Box<dyn Collaborator>,
}

pub struct PortfolioPanel {
    selected: Section,
    portfolio_mount: MountPoint,
    assistant_mount: MountPoint,
    mounted: Option<Mounted>,
    /// Control cells from the last render
    control_areas: Vec<(Section, Rect)>,
    /// Whether the last render was collapsed
    rendered_collapsed: bool,
}

impl PortfolioPanel {
    pub fn new(portfolio_mount: MountPoint, assistant_mount: MountPoint) -> Self {
        Self {
            selected: Section::default(),
            portfolio_mount,
            assistant_mount,
            mounted: None,
            control_areas: Vec::new(),
            rendered_collapsed: false,
        }
    }

    /// Panel wired to the built-in portfolio and chat views
    pub fn from_config(config: &PanelConfig) -> Self {
        let portfolio = config.portfolio.clone();
        let assistant = config.assistant.clone();
        Self::new(
            Box::new(move || -> Box<dyn Collaborator> {
                Box::new(PortfolioManager::new(portfolio.clone()))
            }),
            Box::new(move || -> Box<dyn Collaborator> {
                Box::new(ChatInterface::new(assistant.clone()))
            }),
        )
    }

    pub fn selected(&self) -> Section {
        self.selected
    }

    /// Section of the currently mounted collaborator
    pub fn mounted(&self) -> Option<Section> {
        self.mounted.as_ref().map(|m| m.section)
    }

    /// Set the selector. The mount swap happens on the next render.
    ///
    /// Returns false when `section` was already selected.
    pub fn select(&mut self, section: Section) -> bool {
        if self.selected == section {
            return false;
        }
        tracing::debug!(from = %self.selected, to = %section, "section selected");
        self.selected = section;
        true
    }

    /// Bring the mounted collaborator in line with the selector and props
    pub fn reconcile(&mut self, props: PanelProps) {
        let desired = if props.collapsed {
            None
        } else {
            Some(self.selected)
        };
        if self.mounted() == desired {
            return;
        }

        self.unmount();

        if let Some(section) = desired {
            let mount = match section {
                Section::Portfolio => &self.portfolio_mount,
                Section::Ai => &self.assistant_mount,
            };
            let mut view = mount();
            view.on_mount();
            tracing::info!(section = %section, title = view.title(), "collaborator mounted");
            self.mounted = Some(Mounted { section, view });
        }
    }

    fn unmount(&mut self) {
        if let Some(mut previous) = self.mounted.take() {
            previous.view.on_unmount();
            tracing::info!(section = %previous.section, "collaborator unmounted");
        }
    }

    /// Reconcile, then draw the panel into `area`
    pub fn render(&mut self, frame: &mut Frame, area: Rect, props: PanelProps, theme: &PanelTheme) {
        self.reconcile(props);
        self.rendered_collapsed = props.collapsed;
        if props.collapsed {
            self.render_collapsed(frame, area, theme);
        } else {
            self.render_expanded(frame, area, theme);
        }
    }

    fn tab_bar(&self, theme: &PanelTheme, collapsed: bool) -> TabBar<'static> {
        let tabs = Section::ALL
            .iter()
            .map(|s| Tab {
                icon: s.icon(),
                label: s.label(),
            })
            .collect();
        let bar = TabBar::new(tabs, self.selected.index())
            .active_style(theme.highlight())
            .inactive_style(theme.dimmed());
        if collapsed {
            bar.icons_only(true).orientation(Orientation::Vertical)
        } else {
            bar
        }
    }

    fn record_controls(&mut self, cells: Vec<Rect>) {
        self.control_areas = Section::ALL.iter().copied().zip(cells).collect();
    }

    fn render_collapsed(&mut self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let bar = self.tab_bar(theme, true);
        self.record_controls(bar.layout(inner));
        frame.render_widget(bar, inner);
    }

    fn render_expanded(&mut self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let title = match &self.mounted {
            Some(m) => format!(" {} {} ", m.section.icon(), m.view.title()),
            None => format!(" {} {} ", self.selected.icon(), self.selected.label()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(title, theme.header()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Length(1), // Divider
                Constraint::Min(0),    // Collaborator
            ])
            .split(inner);

        let bar = self.tab_bar(theme, false);
        self.record_controls(bar.layout(chunks[0]));
        frame.render_widget(bar, chunks[0]);

        let divider = Line::from(Span::styled(
            "─".repeat(chunks[1].width as usize),
            theme.dimmed(),
        ));
        frame.render_widget(Paragraph::new(divider), chunks[1]);

        if let Some(m) = &self.mounted {
            m.view.render(frame, chunks[2], theme);
        }
    }

    /// Controls from the last render; `pressed` tracks the live selector
    pub fn controls(&self) -> Vec<Control> {
        self.control_areas
            .iter()
            .map(|&(section, area)| Control {
                section,
                icon: section.icon(),
                label: (!self.rendered_collapsed).then(|| section.label()),
                area,
                pressed: section == self.selected,
            })
            .collect()
    }

    /// Control under a terminal cell, if any
    pub fn control_at(&self, column: u16, row: u16) -> Option<Section> {
        let pos = Position::new(column, row);
        self.control_areas
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|&(section, _)| section)
    }

    /// Route a click through `select`. Returns true if a control was hit.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.control_at(column, row) {
            Some(section) => {
                self.select(section);
                true
            }
            None => false,
        }
    }

    /// Forward a key to the mounted collaborator
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.mounted.as_mut() {
            Some(m) => m.view.handle_key(key),
            None => false,
        }
    }

    pub fn captures_input(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.view.captures_input())
    }
}

impl Drop for PortfolioPanel {
    fn drop(&mut self) {
        self.unmount();
    }
}
