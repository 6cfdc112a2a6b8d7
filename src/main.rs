use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use reckon::{
    CalculationError, CalendarDate, Config, ConfigError, DateError, DeadlineCalculator,
    DeadlineRequest, Locale, RawPeriod,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXIT_INVALID_INPUT: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Invalid --today date: {0}")]
    Today(DateError),

    #[error("{0}")]
    Calculation(CalculationError, Locale),

    #[error("Failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Calculation(..) => EXIT_INVALID_INPUT,
            Self::Config(_) | Self::Today(_) | Self::Json(_) => EXIT_USAGE,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Calculation(error, locale) => error.localized(*locale),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum LocaleArg {
    He,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::He => Self::Hebrew,
            LocaleArg::En => Self::English,
        }
    }
}

/// Calculates a statutory deadline from a start date.
///
/// Start dates before 1 January 2026 get two years, unless that runs past the
/// cutoff; start dates on or after it get 18 months. Non-reckonable periods
/// push the deadline back by their length in days, both ends included.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Cli {
    /// Start date, DD/MM/YYYY or DD/MM/YY ('.', '/' or '-' as separators)
    start: String,

    /// Non-reckonable period, start and end date. Repeat for several periods.
    #[arg(short = 'x', long = "exclude", num_args = 2, value_names = ["START", "END"])]
    exclude: Vec<String>,

    /// Apply non-reckonable periods even if none is given with --exclude
    #[arg(short, long)]
    exclusions: bool,

    /// Calculate as of this date instead of today
    #[arg(long, value_name = "DATE")]
    today: Option<String>,

    /// Output language. Overrides the configuration.
    #[arg(short, long, value_enum)]
    locale: Option<LocaleArg>,

    /// Configuration file (defaults to ./reckon.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn request(&self) -> DeadlineRequest {
        DeadlineRequest {
            start: self.start.clone(),
            exclusions_enabled: self.exclusions || !self.exclude.is_empty(),
            exclusion_periods: self
                .exclude
                .chunks(2)
                .map(|pair| RawPeriod::new(pair[0].as_str(), pair.get(1).map_or("", String::as_str)))
                .collect(),
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match do_work(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{}", e.message());
            std::process::exit(e.exit_code());
        }
    }
}

fn do_work(cli: &Cli) -> Result<String, CliError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        config.locale = locale.into();
    }
    config.json |= cli.json;
    debug!(?config, "configuration loaded");

    let calculator = DeadlineCalculator::from_config(&config);
    let request = cli.request();

    let result = match &cli.today {
        Some(today) => {
            let today = today.parse::<CalendarDate>().map_err(CliError::Today)?;
            calculator.calculate(&request, today)
        }
        None => calculator.calculate_today(&request),
    }
    .map_err(|e| CliError::Calculation(e, config.locale))?;

    let view = result.view(config.locale);
    if config.json {
        return Ok(serde_json::to_string_pretty(&view)?);
    }
    Ok(format!(
        "{}\n{}\n{}",
        view.deadline, view.days_passed, view.explanation
    ))
}
