//! portfolio-panel CLI

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use portfolio_panel::error::{FixSuggestion, PanelError, Result};
use portfolio_panel::tui::{self, PanelProps, PortfolioPanel, Section};
use portfolio_panel::PanelConfig;

#[derive(Parser)]
#[command(name = "portfolio-panel")]
#[command(about = "Portfolio and AI assistant panel for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive panel
    Run {
        /// Path to a YAML config (default: ./portfolio-panel.yaml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start collapsed
        #[arg(long)]
        collapsed: bool,

        /// Write logs to this file (the TUI owns the terminal)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Render one frame to stdout without a terminal
    Render {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        collapsed: bool,

        /// Section to activate before rendering
        #[arg(short, long, value_enum, default_value_t = Section::Portfolio)]
        select: Section,

        #[arg(long, default_value_t = 80)]
        width: u16,

        #[arg(long, default_value_t = 24)]
        height: u16,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate a config file (parse + checks)
    CheckConfig {
        /// Path to the YAML config
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            collapsed,
            log_file,
        } => run(config.as_deref(), collapsed, log_file.as_deref()).await,
        Commands::Render {
            config,
            collapsed,
            select,
            width,
            height,
            format,
        } => {
            init_stderr_logging();
            render(config.as_deref(), collapsed, select, width, height, format)
        }
        Commands::CheckConfig { file } => {
            init_stderr_logging();
            check_config(&file)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

/// Logs to stderr, `warn` unless RUST_LOG says otherwise
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Logs to a file; the interactive view owns stdout and stderr
fn init_file_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn run(config: Option<&Path>, collapsed: bool, log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        init_file_logging(path)?;
    }

    let mut config = PanelConfig::discover(config)?;
    config.collapsed |= collapsed;

    tui::run(&config).await
}

fn render(
    config: Option<&Path>,
    collapsed: bool,
    select: Section,
    width: u16,
    height: u16,
    format: OutputFormat,
) -> Result<()> {
    let config = PanelConfig::discover(config)?;
    let props = PanelProps {
        collapsed: config.collapsed || collapsed,
    };

    let mut panel = PortfolioPanel::from_config(&config);
    panel.select(select);
    let snapshot = tui::render_snapshot(&mut panel, props, width, height)?;

    match format {
        OutputFormat::Text => println!("{}", snapshot.text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(())
}

fn check_config(file: &Path) -> Result<()> {
    let config = PanelConfig::read(file)?;

    let problems = config.problems();
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("  {} {}", "✗".red(), problem);
        }
        return Err(PanelError::InvalidConfig {
            details: format!("{} problem(s) in {}", problems.len(), file.display()),
        });
    }

    println!(
        "{} {} ({} holdings, {} languages)",
        "✓".green(),
        file.display(),
        config.portfolio.holdings.len(),
        config.assistant.languages.len()
    );
    Ok(())
}
