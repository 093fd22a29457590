//! casewatch - terminal dashboard for monthly case counts by governorate.

mod app;
mod event;
mod ui;
mod widgets;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use analytics_facade::{Dashboard, ForecastConfigBuilder, OrdinalScale};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dataset_facade::{DatasetConfig, DEFAULT_DATA_FILE};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use event::{handle_key_event, poll_event};
use ui::draw_ui;

const DEFAULT_LOG_FILTER: &str = "casewatch=info,dataset_core=info,analytics_core=info,analytics_api=info";

#[derive(Parser, Debug)]
#[command(name = "casewatch")]
#[command(version, about = "Dysentery cases in Lebanon: KPIs, charts and a six-month trend forecast")]
struct Args {
    /// CSV file with refArea, refPeriod and Number of cases columns
    #[arg(short, long, env = "CASEWATCH_DATA", default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Log output file (the terminal belongs to the dashboard)
    #[arg(long, env = "CASEWATCH_LOG_FILE", default_value = "casewatch.log")]
    log_file: PathBuf,

    /// Date encoding for the trend regression
    #[arg(long, env = "CASEWATCH_ORDINAL", value_enum, default_value_t = Ordinal::Month)]
    ordinal: Ordinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Ordinal {
    /// Consecutive months one unit apart
    Month,
    /// Calendar day count
    Day,
}

impl From<Ordinal> for OrdinalScale {
    fn from(ordinal: Ordinal) -> Self {
        match ordinal {
            Ordinal::Month => OrdinalScale::MonthIndex,
            Ordinal::Day => OrdinalScale::ProlepticDay,
        }
    }
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    // Load before touching the terminal so failures print normally
    let forecast = ForecastConfigBuilder::new().scale(args.ordinal.into()).build();
    let dashboard = Dashboard::open(&DatasetConfig::new(&args.data), forecast)
        .with_context(|| format!("failed to load {}", args.data.display()))?;
    info!(source = dashboard.source_name(), scale = forecast.scale.name(), "dashboard ready");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dashboard);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        // Clear expired status messages
        app.clear_expired_status();

        if let Some(Event::Key(key)) = poll_event(tick_rate)? {
            handle_key_event(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    info!("dashboard closed");
    Ok(())
}
