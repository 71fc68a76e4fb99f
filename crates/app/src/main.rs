use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use serenade_core::model::{PresentationSettings, PresentationSettingsDraft};
use services::{AppServices, Clock, GalleryService, MusicService, QuizService};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDate { raw: String },
    InvalidClicks { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDate { raw } => {
                write!(f, "invalid --since value: {raw} (expected YYYY-MM-DD)")
            }
            ArgsError::InvalidClicks { raw } => write!(f, "invalid --clicks value: {raw}"),
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
    start_page: Option<String>,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> Arc<PresentationSettings> {
        self.services.settings()
    }

    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn start_page(&self) -> Option<String> {
        self.start_page.clone()
    }

    fn gallery(&self) -> Arc<GalleryService> {
        self.services.gallery()
    }

    fn music(&self) -> Arc<MusicService> {
        self.services.music()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }
}

struct Args {
    draft: PresentationSettingsDraft,
    start_page: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--pictures <dir>] [--music <dir>] [--title <text>] \
         [--since <YYYY-MM-DD>] [--clicks <n>] [--page <gallery|quiz>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --pictures pictures");
    eprintln!("  --music music");
    eprintln!("  --since 2021-05-29");
    eprintln!("  --clicks 2");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SERENADE_PICTURES_DIR, SERENADE_MUSIC_DIR, SERENADE_TITLE, SERENADE_SINCE,");
    eprintln!("  SERENADE_PAGE, RUST_LOG");
}

fn parse_since(raw: String) -> Result<chrono::NaiveDateTime, ArgsError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(ArgsError::InvalidDate { raw })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut draft = PresentationSettingsDraft {
            pictures_dir: env_value("SERENADE_PICTURES_DIR").map(PathBuf::from),
            music_dir: env_value("SERENADE_MUSIC_DIR").map(PathBuf::from),
            title: env_value("SERENADE_TITLE"),
            relationship_start: env_value("SERENADE_SINCE").map(parse_since).transpose()?,
            ..PresentationSettingsDraft::default()
        };
        let mut start_page = env_value("SERENADE_PAGE");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pictures" => {
                    draft.pictures_dir = Some(PathBuf::from(require_value(args, "--pictures")?));
                }
                "--music" => {
                    draft.music_dir = Some(PathBuf::from(require_value(args, "--music")?));
                }
                "--title" => {
                    draft.title = Some(require_value(args, "--title")?);
                }
                "--since" => {
                    draft.relationship_start = Some(parse_since(require_value(args, "--since")?)?);
                }
                "--clicks" => {
                    let value = require_value(args, "--clicks")?;
                    let parsed: u32 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidClicks { raw: value.clone() })?;
                    draft.clicks_to_proposal = Some(parsed);
                }
                "--page" => {
                    start_page = Some(require_value(args, "--page")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { draft, start_page })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let settings = parsed.draft.validate()?;
    let window_title = settings.title().to_string();
    let services = AppServices::new(settings, Clock::system())?;
    info!(start_page = ?parsed.start_page, "launching presentation");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        start_page: parsed.start_page,
    });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window; keep it a normal one.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(window_title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    log_fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
