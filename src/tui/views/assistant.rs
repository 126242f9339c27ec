//! Chat View - multilingual assistant
//!
//! Layout:
//! ```text
//! +-----------------------------------------------------+
//! | ✦ Hello! Ask me about your portfolio.               |
//! | › how is AAPL doing?                                |
//! | ✦ Received: how is AAPL doing?                      |
//! +- en · English --------------------------------------+
//! | › _                                                 |
//! +-----------------------------------------------------+
//! ```
//!
//! Replies are produced locally in the active language.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::{AssistantConfig, Language};
use crate::tui::collaborator::Collaborator;
use crate::tui::theme::{icons, PanelTheme};

/// Message role in conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

pub struct ChatInterface {
    languages: Vec<Language>,
    /// Index into `languages`
    active: usize,
    messages: Vec<ChatMessage>,
    input: String,
}

impl ChatInterface {
    pub fn new(config: AssistantConfig) -> Self {
        let mut languages = config.languages;
        if languages.is_empty() {
            languages.push(config.default_language);
        }
        let active = languages
            .iter()
            .position(|&l| l == config.default_language)
            .unwrap_or(0);
        let greeting = ChatMessage::new(MessageRole::Assistant, languages[active].greeting());

        Self {
            languages,
            active,
            messages: vec![greeting],
            input: String::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.languages[self.active]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Send the input line. Blank input is ignored.
    pub fn submit(&mut self) -> bool {
        let text = self.input.trim().to_string();
        self.input.clear();
        if text.is_empty() {
            return false;
        }
        let reply = self.language().reply(&text);
        self.messages.push(ChatMessage::new(MessageRole::User, text));
        self.messages
            .push(ChatMessage::new(MessageRole::Assistant, reply));
        true
    }

    /// Switch to the next configured language
    pub fn cycle_language(&mut self) {
        self.active = (self.active + 1) % self.languages.len();
        let language = self.language();
        tracing::debug!(language = %language, "assistant language changed");
        self.messages.push(ChatMessage::new(
            MessageRole::System,
            format!("{} · {}", language.code(), language.name()),
        ));
        self.messages
            .push(ChatMessage::new(MessageRole::Assistant, language.greeting()));
    }

    fn message_line<'a>(&self, message: &'a ChatMessage, theme: &PanelTheme) -> Line<'a> {
        let (icon, style) = match message.role {
            MessageRole::User => (icons::USER, theme.text()),
            MessageRole::Assistant => (icons::BOT, theme.highlight()),
            MessageRole::System => (icons::SYSTEM, theme.dimmed()),
        };
        Line::from(vec![
            Span::styled(format!("{} ", icon), style),
            Span::styled(message.content.as_str(), theme.text()),
        ])
    }
}

impl Collaborator for ChatInterface {
    fn title(&self) -> &str {
        "AI Assistant"
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);

        // Scroll by wrapped rows so the newest reply sits on the last row
        let lines: Vec<Line> = self
            .messages
            .iter()
            .map(|m| self.message_line(m, theme))
            .collect();
        let history = Paragraph::new(lines).wrap(Wrap { trim: false });
        let rows = history.line_count(chunks[0].width);
        let offset = rows.saturating_sub(chunks[0].height as usize);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        frame.render_widget(history.scroll((offset, 0)), chunks[0]);

        let language = self.language();
        let input = Line::from(vec![
            Span::styled(format!("{} ", icons::USER), theme.accent()),
            Span::styled(self.input.as_str(), theme.text()),
            Span::styled(icons::CURSOR, theme.accent()),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(
                format!(" {} · {} ", language.code(), language.name()),
                theme.accent(),
            ));
        frame.render_widget(Paragraph::new(input).block(block), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
                self.cycle_language();
                true
            }
            (_, KeyCode::Enter) => {
                self.submit();
                true
            }
            (_, KeyCode::Backspace) => {
                self.input.pop();
                true
            }
            (_, KeyCode::Esc) => {
                self.input.clear();
                true
            }
            (m, KeyCode::Char(c))
                if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
                true
            }
            _ => false,
        }
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn on_mount(&mut self) {
        tracing::debug!(language = %self.language(), "assistant view ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn chat() -> ChatInterface {
        ChatInterface::new(AssistantConfig {
            languages: vec![Language::En, Language::Es],
            default_language: Language::En,
        })
    }

    fn type_text(view: &mut ChatInterface, text: &str) {
        for c in text.chars() {
            view.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_with_greeting_in_default_language() {
        let view = ChatInterface::new(AssistantConfig {
            languages: vec![Language::Fr, Language::De],
            default_language: Language::De,
        });
        assert_eq!(view.language(), Language::De);
        assert_eq!(view.messages().len(), 1);
        assert_eq!(view.messages()[0].content, Language::De.greeting());
    }

    #[test]
    fn test_submit_appends_user_and_reply() {
        let mut view = chat();
        type_text(&mut view, "hello q1");
        assert_eq!(view.input(), "hello q1");

        view.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(view.input(), "");

        let messages = view.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "hello q1");
        assert_eq!(messages[2].content, "Received: hello q1");
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut view = chat();
        type_text(&mut view, "   ");
        assert!(!view.submit());
        assert_eq!(view.messages().len(), 1);
    }

    #[test]
    fn test_ctrl_l_cycles_language() {
        let mut view = chat();
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);

        view.handle_key(ctrl_l);
        assert_eq!(view.language(), Language::Es);
        assert_eq!(view.input(), "");

        type_text(&mut view, "hola");
        view.submit();
        assert_eq!(view.messages().last().unwrap().content, "Recibido: hola");

        view.handle_key(ctrl_l);
        assert_eq!(view.language(), Language::En);
    }

    #[test]
    fn test_backspace_and_esc() {
        let mut view = chat();
        type_text(&mut view, "abc");
        view.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(view.input(), "ab");
        view.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(view.input(), "");
    }

    #[test]
    fn test_alt_keys_are_not_captured() {
        let mut view = chat();
        let alt_1 = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT);
        assert!(!view.handle_key(alt_1));
        assert!(view.captures_input());
    }

    #[test]
    fn test_render_shows_language_and_messages() {
        let mut view = chat();
        type_text(&mut view, "status");
        view.submit();

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        let theme = PanelTheme::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &theme)
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();

        assert!(text.contains("en · English"));
        assert!(text.contains("Received: status"));
    }

    fn screen_rows(view: &ChatInterface, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = PanelTheme::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &theme)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_newest_reply_visible_after_wrapped_messages() {
        let mut view = chat();
        type_text(&mut view, &"x".repeat(50));
        view.submit();
        type_text(&mut view, "last");
        view.submit();

        // 30x8 leaves five history rows above the input box
        let rows = screen_rows(&view, 30, 8);
        assert!(rows[4].contains("Received: last"), "rows: {:#?}", rows);
        assert!(rows[3].contains("last"));
        assert!(!rows.iter().any(|r| r.contains("Hello!")));
        assert!(rows[5].contains("en · English"));
    }

    #[test]
    fn test_short_history_starts_at_top() {
        let view = chat();
        let rows = screen_rows(&view, 60, 8);
        assert!(rows[0].contains("Hello! Ask me about your portfolio."));
    }
}
