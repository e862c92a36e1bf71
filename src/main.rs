use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio_terminal::app::PortfolioApp;
use portfolio_terminal::config::Config;
use portfolio_terminal::console::Console;
use portfolio_terminal::content::Content;
use portfolio_terminal::session::Theme;
use portfolio_terminal::shell::Shell;

/// Interactive terminal-style portfolio.
#[derive(Parser, Debug)]
#[command(name = "portfolio-terminal", version, about)]
struct Cli {
    /// JSON file replacing the built-in portfolio content
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Starting theme: standard or void
    #[arg(long, value_name = "THEME")]
    theme: Option<Theme>,

    /// Skip the boot sequence
    #[arg(long)]
    skip_boot: bool,

    /// Run in the current terminal instead of opening a window
    #[arg(long)]
    console: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.content {
            config.content_path = Some(path.clone());
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.skip_boot {
            config.skip_boot = true;
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let is_json = matches!(
        std::env::var("PORTFOLIO_LOG_FORMAT").ok().as_deref(),
        Some("json") | Some("JSON")
    );
    if is_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_content(config: &Config) -> Result<Content> {
    let Some(path) = &config.content_path else {
        info!("using built-in portfolio content");
        return Ok(Content::builtin());
    };
    let content = Content::load(path)
        .with_context(|| format!("failed to load portfolio content from {}", path.display()))?;
    info!(
        path = %path.display(),
        projects = content.projects.len(),
        "loaded portfolio content"
    );
    Ok(content)
}

fn run_gui(shell: Shell, config: &Config) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("DIIZZY Interactive Terminal")
            .with_resizable(true),
        ..Default::default()
    };

    let app = PortfolioApp::new(shell, config);
    eframe::run_native(
        "portfolio-terminal",
        options,
        Box::new(|cc| {
            let mut visuals = egui::Visuals::dark();
            visuals.window_fill = egui::Color32::BLACK;
            visuals.panel_fill = egui::Color32::BLACK;
            visuals.extreme_bg_color = egui::Color32::BLACK;
            cc.egui_ctx.set_visuals(visuals);

            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("failed to start the terminal window: {err}"))
}

fn run_console(shell: Shell, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let piped = !stdin.is_tty();
    let mut console =
        Console::new(shell, stdin.lock(), stdout.lock(), config.skip_boot).with_echo(piped);
    console.run().context("console session failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Loads .env before the log filter is read.
    let mut config = Config::from_env().context("invalid environment configuration")?;
    init_tracing();
    cli.apply(&mut config);

    let content = load_content(&config)?;
    let shell = Shell::new(Arc::new(content), config.theme);
    info!(theme = %config.theme, console = cli.console, "starting portfolio terminal");

    if cli.console {
        run_console(shell, &config)
    } else {
        run_gui(shell, &config)
    }
}
