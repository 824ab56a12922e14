//! subnet-views CLI
//!
//! Interactive multi-view terminal demo, plus a plain dump of its table.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use subnet_views::config::{AppConfig, BackMode, OutputFormat};
use subnet_views::data::CITY_ROWS;
use subnet_views::logging::init_logging;
use subnet_views::report::format_rows;
use subnet_views::tui::run::{App, run};
use subnet_views::tui::state::Model;
use subnet_views::tui::view::FAREWELL;

#[derive(Parser)]
#[command(name = "subnet-views")]
#[command(about = "Menu, subnet table, address form and type picker in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Draw below the prompt instead of on the alternate screen
    #[arg(long)]
    inline: bool,

    /// How esc navigates back
    #[arg(long, value_enum, default_value = "decrement")]
    back_mode: BackModeArg,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Append tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample table and exit
    Rows {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BackModeArg {
    /// Step down the screen order (default)
    Decrement,
    /// Return to the previously shown screen
    History,
}

impl From<BackModeArg> for BackMode {
    fn from(arg: BackModeArg) -> Self {
        match arg {
            BackModeArg::Decrement => BackMode::Decrement,
            BackModeArg::History => BackMode::History,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Rows { format }) => cmd_rows(format.into()),
        None => {
            let config = AppConfig {
                alt_screen: !cli.inline,
                back_mode: cli.back_mode.into(),
                color: !cli.no_color,
                log_file: cli.log_file,
            };
            cmd_tui(&config)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_rows(format: OutputFormat) -> anyhow::Result<ExitCode> {
    let output = format_rows(&CITY_ROWS, format).context("failed to serialize rows")?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_tui(config: &AppConfig) -> anyhow::Result<ExitCode> {
    // Held until main returns so buffered log lines get flushed.
    let _guard = init_logging(config.log_file.as_deref())?;

    let theme = config.theme();
    let mut app = App::new(Model::new(config.back_mode), &theme);

    if let Err(err) = run(&mut app, config) {
        tracing::error!(%err, "terminal failure");
        eprintln!("could not start program: {}", err);
        return Ok(ExitCode::FAILURE);
    }

    // Selection failures end the session silently apart from the log.
    if let Some(err) = &app.model.error {
        tracing::error!(%err, "session ended with a fatal error");
        return Ok(ExitCode::FAILURE);
    }

    println!("\n  {}\n", FAREWELL);
    Ok(ExitCode::SUCCESS)
}
