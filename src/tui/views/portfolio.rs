//! Portfolio View - holdings table
//!
//! Layout:
//! ```text
//! +---------------------------------------------------------+
//! | Symbol   Qty      Price        Value          Gain      |
//! | ▸ AAPL   12       189.84 USD   2,278.08 USD   +535.68   |
//! |   MSFT   8        ...                                   |
//! +---------------------------------------------------------+
//! | Total  7,990.06 USD   +719.84 USD                       |
//! +---------------------------------------------------------+
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::PortfolioConfig;
use crate::tui::collaborator::Collaborator;
use crate::tui::theme::PanelTheme;
use crate::tui::widgets::utils::{format_money, format_signed};

pub struct PortfolioManager {
    config: PortfolioConfig,
    /// Highlighted row
    selected: usize,
}

impl PortfolioManager {
    pub fn new(config: PortfolioConfig) -> Self {
        Self {
            config,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn total_value(&self) -> f64 {
        self.config.holdings.iter().map(|h| h.market_value()).sum()
    }

    /// Sum of gains over holdings with a known cost basis
    pub fn total_gain(&self) -> f64 {
        self.config.holdings.iter().filter_map(|h| h.gain()).sum()
    }

    fn select_next(&mut self) {
        if !self.config.holdings.is_empty() {
            self.selected = (self.selected + 1).min(self.config.holdings.len() - 1);
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let currency = self.config.currency.as_str();

        let header = Row::new(vec!["Symbol", "Qty", "Price", "Value", "Gain"]).style(theme.accent());

        let rows: Vec<Row> = self
            .config
            .holdings
            .iter()
            .map(|h| {
                let gain = match h.gain() {
                    Some(g) => Span::styled(format_signed(g, currency), theme.gain_style(g)),
                    None => Span::styled("n/a", theme.dimmed()),
                };
                Row::new(vec![
                    Cell::from(Span::styled(h.symbol.clone(), theme.text())),
                    Cell::from(format!("{}", h.quantity)),
                    Cell::from(format_money(h.price, currency)),
                    Cell::from(format_money(h.market_value(), currency)),
                    Cell::from(gain),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Min(12),
                Constraint::Min(14),
                Constraint::Min(14),
            ],
        )
        .header(header)
        .row_highlight_style(theme.highlight())
        .highlight_symbol("▸ ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }
}

impl Collaborator for PortfolioManager {
    fn title(&self) -> &str {
        "Portfolio"
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        if self.config.holdings.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No holdings configured",
                theme.dimmed(),
            )));
            frame.render_widget(empty, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        self.render_table(frame, chunks[0], theme);

        let currency = self.config.currency.as_str();
        let gain = self.total_gain();
        let total = Line::from(vec![
            Span::styled(" Total  ", theme.header()),
            Span::styled(format_money(self.total_value(), currency), theme.text()),
            Span::raw("   "),
            Span::styled(format_signed(gain, currency), theme.gain_style(gain)),
        ]);
        frame.render_widget(Paragraph::new(total), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                true
            }
            _ => false,
        }
    }

    fn on_mount(&mut self) {
        tracing::debug!(holdings = self.config.holdings.len(), "portfolio view ready");
    }
}
