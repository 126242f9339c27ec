//! TUI Widgets - UI Components
//!
//! Stateless renderers. State lives in the panel and the collaborators.

mod tabs;

pub use tabs::{Orientation, Tab, TabBar};

/// Common widget utilities
pub mod utils {
    /// Format an amount with two decimals and thousands separators
    pub fn format_money(value: f64, currency: &str) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let cents = (value.abs() * 100.0).round() as u64;
        let whole = group_thousands(cents / 100);
        format!("{}{}.{:02} {}", sign, whole, cents % 100, currency)
    }

    /// Like `format_money` but always carries a sign
    pub fn format_signed(value: f64, currency: &str) -> String {
        if value >= 0.0 {
            format!("+{}", format_money(value, currency))
        } else {
            format_money(value, currency)
        }
    }

    fn group_thousands(n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}
