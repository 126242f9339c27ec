//! TUI Application - Main entry point and run loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use super::events::{handle_event, poll_event, Action};
use super::panel::{PanelProps, PortfolioPanel};
use super::theme::PanelTheme;
use crate::config::PanelConfig;
use crate::error::{PanelError, Result};

/// Application shell: owns the collapsed flag and the panel
pub struct TuiApp {
    panel: PortfolioPanel,
    theme: PanelTheme,
    collapsed: bool,
    tick_rate: Duration,
    should_quit: bool,
}

impl TuiApp {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            panel: PortfolioPanel::from_config(config),
            theme: PanelTheme::new(),
            collapsed: config.collapsed,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            should_quit: false,
        }
    }

    pub fn panel(&self) -> &PortfolioPanel {
        &self.panel
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the TUI application
    pub async fn run(mut self) -> Result<()> {
        tracing::info!(collapsed = self.collapsed, "TUI started");

        let mut terminal = self.setup_terminal()?;
        let result = self.main_loop(&mut terminal);

        // Restore even when the loop failed
        let restored = self.restore_terminal(&mut terminal);
        tracing::info!("TUI stopped");

        result.and(restored)
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(terminal_error("enable raw mode"))?;
        let entered = (|| {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
                .map_err(terminal_error("enter alternate screen"))?;
            let backend = CrosstermBackend::new(stdout);
            Terminal::new(backend).map_err(terminal_error("create terminal"))
        })();
        reset_on_error(entered, disable_raw_mode)
    }

    fn restore_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(terminal_error("disable raw mode"))?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(terminal_error("leave alternate screen"))?;
        terminal.show_cursor().map_err(terminal_error("show cursor"))?;
        Ok(())
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.render(frame))
                .map_err(terminal_error("draw frame"))?;

            if let Some(event) = poll_event(self.tick_rate).map_err(terminal_error("poll events"))? {
                let action = handle_event(event, self.panel.captures_input());
                self.apply(action);
            }
        }
        Ok(())
    }

    /// Apply one input action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Select(section) => {
                self.panel.select(section);
            }
            Action::ToggleCollapsed => {
                self.collapsed = !self.collapsed;
                tracing::debug!(collapsed = self.collapsed, "collapsed toggled");
            }
            Action::Click { column, row } => {
                self.panel.click(column, row);
            }
            Action::Forward(key) => {
                self.panel.handle_key(key);
            }
            Action::None => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),    // Panel
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let props = PanelProps {
            collapsed: self.collapsed,
        };
        let panel_area = if self.collapsed {
            // Icon rail: "[x]" plus borders
            Rect {
                width: chunks[0].width.min(5),
                ..chunks[0]
            }
        } else {
            chunks[0]
        };
        self.panel.render(frame, panel_area, props, &self.theme);

        self.render_footer(frame, chunks[1]);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help = if self.panel.captures_input() {
            Line::from(vec![
                Span::styled(" [Alt+1/2]", self.theme.accent()),
                Span::styled(" section  ", self.theme.dimmed()),
                Span::styled("[Ctrl+B]", self.theme.accent()),
                Span::styled(" collapse  ", self.theme.dimmed()),
                Span::styled("[Ctrl+L]", self.theme.accent()),
                Span::styled(" language  ", self.theme.dimmed()),
                Span::styled("[Ctrl+C]", self.theme.accent()),
                Span::styled(" quit", self.theme.dimmed()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" [q]", self.theme.accent()),
                Span::styled("uit  ", self.theme.dimmed()),
                Span::styled("[1/2]", self.theme.accent()),
                Span::styled(" section  ", self.theme.dimmed()),
                Span::styled("[c]", self.theme.accent()),
                Span::styled("ollapse  ", self.theme.dimmed()),
                Span::styled("[↑↓]", self.theme.accent()),
                Span::styled(" select", self.theme.dimmed()),
            ])
        };

        frame.render_widget(Paragraph::new(help), area);
    }
}

/// Run `reset` when setup failed part way, keeping the setup error
fn reset_on_error<T>(result: Result<T>, reset: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if result.is_err() {
        if let Err(e) = reset() {
            tracing::warn!(error = %e, "failed to reset terminal after setup error");
        }
    }
    result
}

fn terminal_error(context: &'static str) -> impl Fn(io::Error) -> PanelError {
    move |e| PanelError::Terminal {
        reason: format!("Failed to {}: {}", context, e),
    }
}
