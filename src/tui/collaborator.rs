//! Collaborator trait for the views mounted by the panel
//!
//! The panel treats each collaborator as opaque: it creates one from a
//! mount point, draws it, forwards keys to it and drops it on unmount.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use super::theme::PanelTheme;

/// A child view mounted by [`PortfolioPanel`](super::PortfolioPanel)
pub trait Collaborator {
    /// Short title, used in the panel border
    fn title(&self) -> &str;

    /// Render into the content area
    fn render(&self, frame: &mut Frame, area: Rect, theme: &PanelTheme);

    /// Handle a key event. Returns true when the key was consumed.
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }

    /// True while the view wants raw text input (single-letter shortcuts off)
    fn captures_input(&self) -> bool {
        false
    }

    /// Called once right after the instance is created by its mount point
    fn on_mount(&mut self) {}

    /// Called once right before the instance is dropped
    fn on_unmount(&mut self) {}
}

/// Zero-argument mount point producing a fresh collaborator
pub type MountPoint = Box<dyn Fn() -> Box<dyn Collaborator>>;

#[cfg(test)]
mod tests {
    use super::*;

    struct MockView;

    impl Collaborator for MockView {
        fn title(&self) -> &str {
            "Mock"
        }

        fn render(&self, _frame: &mut Frame, _area: Rect, _theme: &PanelTheme) {}
    }

    #[test]
    fn test_default_hooks() {
        let mut view = MockView;
        let key = KeyEvent::from(crossterm::event::KeyCode::Char('x'));
        assert!(!view.handle_key(key));
        assert!(!view.captures_input());
        view.on_mount();
        view.on_unmount();
    }

    #[test]
    fn test_mount_point_creates_fresh_instances() {
        let mount: MountPoint = Box::new(|| -> Box<dyn Collaborator> { Box::new(MockView) });
        let a = mount();
        let b = mount();
        assert_eq!(a.title(), "Mock");
        assert_eq!(b.title(), "Mock");
    }
}
