use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Celebration, SurveyStore};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, ConfettiCelebration, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://survey.sqlite3";
const DB_URL_ENV: &str = "SURVEY_DB_URL";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    survey_store: Arc<dyn SurveyStore>,
    celebration: Arc<dyn Celebration>,
}

impl UiApp for DesktopApp {
    fn survey_store(&self) -> Arc<dyn SurveyStore> {
        Arc::clone(&self.survey_store)
    }

    fn celebration(&self) -> Arc<dyn Celebration> {
        Arc::clone(&self.celebration)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut db_url = env_db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { db_url }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, std::env::var(DB_URL_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;
    tracing::info!(db = %args.db_url, "storage ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        survey_store: Arc::clone(&storage.survey),
        celebration: Arc::new(ConfettiCelebration::default()),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Encuesta")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
