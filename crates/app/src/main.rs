use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use detective_core::CaseFile;
use detective_core::model::DetectiveName;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::{AppServices, DEFAULT_CLUES_PATH, FileCaseContent};
use tracing::{info, warn};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://detective_game.db";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidName { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidName { raw } => write!(f, "invalid --name value: {raw:?}"),
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
    services: AppServices,
    preset_detective: Option<DetectiveName>,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn preset_detective(&self) -> Option<DetectiveName> {
        self.preset_detective.clone()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    clues_path: PathBuf,
    detective: Option<DetectiveName>,
    verbose: bool,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--clues <path>] [--name <detective>] [-v]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --clues {DEFAULT_CLUES_PATH}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DETECTIVE_DB_URL, DETECTIVE_CLUES_PATH, DETECTIVE_NAME, RUST_LOG");
}

impl Args {
    /// Parse flags, falling back to `env` for anything not given.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env("DETECTIVE_DB_URL")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut clues_path = env("DETECTIVE_CLUES_PATH")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CLUES_PATH), PathBuf::from);
        let mut detective = env("DETECTIVE_NAME").and_then(|value| DetectiveName::new(value).ok());
        let mut verbose = false;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--clues" => {
                    clues_path = PathBuf::from(require_value(args, "--clues")?);
                }
                "--name" => {
                    let value = require_value(args, "--name")?;
                    let name = DetectiveName::new(value.clone())
                        .map_err(|_| ArgsError::InvalidName { raw: value })?;
                    detective = Some(name);
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url: normalize_sqlite_url(db_url),
            clues_path,
            detective,
            verbose,
            help,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
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

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!(verbose, "logging initialized");
}

/// Open the store and clue file. The game still launches if the store is unusable.
async fn build_services(args: &Args) -> AppServices {
    match prepare_sqlite_file(&args.db_url) {
        Ok(()) => AppServices::new_sqlite(&args.db_url, args.clues_path.clone()).await,
        Err(err) => {
            warn!(db_url = %args.db_url, error = %err, "progress tracking disabled");
            let content = FileCaseContent::new(CaseFile::museum_heist(), args.clues_path.clone());
            AppServices::new(None, Arc::new(content)).with_storage_unavailable(err.to_string())
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    setup_logging(parsed.verbose);
    info!(
        db_url = %parsed.db_url,
        clues = %parsed.clues_path.display(),
        "starting detective game"
    );

    let services = build_services(&parsed).await;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        preset_detective: parsed.detective,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("🕵️ Detective Game")
            .with_inner_size(LogicalSize::new(600.0, 400.0))
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
        eprintln!("{err}");
        std::process::exit(2);
    }
}
