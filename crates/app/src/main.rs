use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, QuizLoopService};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

const SAMPLE_BANK: &str = include_str!("../assets/sample_bank.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    quiz: Arc<QuizLoopService>,
    link_opener: LinkOpenerRef,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

const USAGE: &str = "\
Usage:
  cargo run -p app -- [--bank <path>] [--home-url <url>] [--title <text>]

Without --bank the bundled sample bank is used. It ships without audio or
image files, so its players stay silent. Point --bank at a bank file whose
relative media paths resolve against the file's directory to hear the clips.

Environment:
  LISTENING_BANK_PATH, LISTENING_HOME_URL, RUST_LOG
";

fn print_usage() {
    eprint!("{USAGE}");
}

#[derive(Debug, Default)]
struct Args {
    bank_path: Option<PathBuf>,
    home_url: Option<String>,
    title: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            bank_path: env_value("LISTENING_BANK_PATH").map(PathBuf::from),
            home_url: env_value("LISTENING_HOME_URL"),
            title: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => parsed.bank_path = Some(require_value(args, "--bank")?.into()),
                "--home-url" => parsed.home_url = Some(require_value(args, "--home-url")?),
                "--title" => parsed.title = Some(require_value(args, "--title")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        print_usage();
        e
    })?;

    let clock = Clock::default_clock();
    let services = match &args.bank_path {
        Some(path) => {
            info!(path = %path.display(), "loading question bank");
            AppServices::new_json_file(path.clone(), clock, args.home_url.clone()).await?
        }
        None => {
            warn!("no --bank given; the bundled sample bank has no audio or image files");
            AppServices::new_json_str(SAMPLE_BANK, clock, args.home_url.clone()).await?
        }
    };

    let title = args
        .title
        .unwrap_or_else(|| services.bank().title().to_string());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz: services.quiz(),
        link_opener: Arc::new(DesktopLinkOpener),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
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
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
