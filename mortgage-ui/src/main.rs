use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, warn};

use mortgage_core::MortgageSession;
use mortgage_ui::config::AppConfig;
use mortgage_ui::presenter::Presenter;
use mortgage_ui::terminal::TerminalPresenter;
use mortgage_ui::{app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly mortgage payment calculator.
///
/// Without arguments, asks for the principal, interest rate and mortgage
/// period one at a time and shows the monthly payment. With all three of
/// `--principal`, `--rate` and `--years`, prints the result and exits.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file (logging and message overrides).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `mortgage_core=debug`. Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file. Overrides the config file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Principal amount.
    #[arg(long, requires_all = ["rate", "years"])]
    principal: Option<String>,

    /// Annual interest rate in percent.
    #[arg(long, requires_all = ["principal", "years"])]
    rate: Option<String>,

    /// Mortgage period in years.
    #[arg(long, requires_all = ["principal", "rate"])]
    years: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let log = logging::init()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(level) = cli.log_level.as_ref().or(config.logging.level.as_ref()) {
        log.set_level(level)?;
    }
    if let Some(file) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        log.log_to_file(file)?;
    }

    let strings = config.string_table()?;
    let stdin = io::stdin();
    let mut presenter = TerminalPresenter::new(stdin.lock(), io::stdout().lock(), strings);

    if let (Some(principal), Some(rate), Some(years)) = (&cli.principal, &cli.rate, &cli.years) {
        debug!("one-shot mode");
        return match app::calculate_once(principal, rate, years) {
            Ok(summary) => {
                presenter
                    .show_summary(&summary, &summary.formatted_monthly_payment())
                    .context("failed to write summary")?;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "one-shot calculation failed");
                bail!("{}", presenter.strings().get(e.message_key()))
            }
        };
    }

    let mut session = MortgageSession::new();
    app::run(&mut session, &mut presenter).context("terminal i/o failed")?;

    Ok(())
}
