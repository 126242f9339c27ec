//! Panel configuration (YAML)
//!
//! ```yaml
//! collapsed: false
//! tick_rate_ms: 100
//! portfolio:
//!   currency: USD
//!   holdings:
//!     - symbol: AAPL
//!       quantity: 10
//!       price: 190.5
//!       cost_basis: 150.0
//! assistant:
//!   languages: [en, es, ja]
//!   default_language: en
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "portfolio-panel.yaml";

/// Ticker symbols: uppercase alphanumerics, dots and dashes (e.g. `BRK.B`)
static SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9.\-]{0,9}$").expect("valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Initial value of the container-owned collapsed flag
    pub collapsed: bool,
    /// Event poll timeout for the interactive loop
    pub tick_rate_ms: u64,
    pub portfolio: PortfolioConfig,
    pub assistant: AssistantConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            collapsed: false,
            tick_rate_ms: 100,
            portfolio: PortfolioConfig::default(),
            assistant: AssistantConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    pub currency: String,
    pub holdings: Vec<Holding>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            holdings: vec![
                Holding::new("AAPL", 12.0, 189.84, Some(145.20)),
                Holding::new("MSFT", 8.0, 415.50, Some(380.00)),
                Holding::new("NVDA", 5.0, 118.11, Some(131.40)),
                Holding::new("VTI", 20.0, 268.02, None),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(default)]
    pub cost_basis: Option<f64>,
}

impl Holding {
    pub fn new(symbol: &str, quantity: f64, price: f64, cost_basis: Option<f64>) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity,
            price,
            cost_basis,
        }
    }

    pub fn market_value(&self) -> f64 {
        self.quantity * self.price
    }

    /// Unrealized gain, if a cost basis is known
    pub fn gain(&self) -> Option<f64> {
        self.cost_basis
            .map(|cost| (self.price - cost) * self.quantity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    pub languages: Vec<Language>,
    pub default_language: Language,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            default_language: Language::En,
        }
    }
}

/// Languages the chat interface can answer in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    Pt,
    Ja,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Pt,
        Language::Ja,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
            Language::Ja => "ja",
        }
    }

    /// Native display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Pt => "Português",
            Language::Ja => "日本語",
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Language::En => "Hello! Ask me about your portfolio.",
            Language::Es => "¡Hola! Pregúntame sobre tu cartera.",
            Language::Fr => "Bonjour ! Posez-moi une question sur votre portefeuille.",
            Language::De => "Hallo! Frag mich zu deinem Portfolio.",
            Language::Pt => "Olá! Pergunte-me sobre sua carteira.",
            Language::Ja => "こんにちは！ポートフォリオについて質問してください。",
        }
    }

    /// Local acknowledgement for a submitted message
    pub fn reply(&self, message: &str) -> String {
        match self {
            Language::En => format!("Received: {}", message),
            Language::Es => format!("Recibido: {}", message),
            Language::Fr => format!("Reçu : {}", message),
            Language::De => format!("Erhalten: {}", message),
            Language::Pt => format!("Recebido: {}", message),
            Language::Ja => format!("受信しました: {}", message),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl PanelConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse a config file without validating it
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PanelError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let yaml = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&yaml)?)
    }

    /// Resolve the config: explicit path, then `./portfolio-panel.yaml`, then defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load(local);
        }
        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PanelConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Collect every problem, not just the first one
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.tick_rate_ms == 0 {
            problems.push("tick_rate_ms must be greater than 0".to_string());
        }

        if self.portfolio.currency.trim().is_empty() {
            problems.push("portfolio.currency must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for holding in &self.portfolio.holdings {
            if !SYMBOL_RE.is_match(&holding.symbol) {
                problems.push(format!("invalid symbol '{}'", holding.symbol));
            }
            if !seen.insert(holding.symbol.as_str()) {
                problems.push(format!("duplicate symbol '{}'", holding.symbol));
            }
            if holding.quantity < 0.0 || !holding.quantity.is_finite() {
                problems.push(format!("{}: quantity must be >= 0", holding.symbol));
            }
            if holding.price < 0.0 || !holding.price.is_finite() {
                problems.push(format!("{}: price must be >= 0", holding.symbol));
            }
            if matches!(holding.cost_basis, Some(c) if c < 0.0 || !c.is_finite()) {
                problems.push(format!("{}: cost_basis must be >= 0", holding.symbol));
            }
        }

        if self.assistant.languages.is_empty() {
            problems.push("assistant.languages must not be empty".to_string());
        } else if !self
            .assistant
            .languages
            .contains(&self.assistant.default_language)
        {
            problems.push(format!(
                "assistant.default_language '{}' is not in assistant.languages",
                self.assistant.default_language
            ));
        }

        problems
    }

    pub fn validate(&self) -> Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(PanelError::InvalidConfig {
                details: problems.join("; "),
            })
        }
    }
}
