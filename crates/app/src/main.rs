use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AssistantService, Clock, EssayService, HistoryService, QuizService,
    ReferenceService,
};
use storage::repository::Storage;
use study_core::model::QuizSettings;
use study_core::model::content::APP_TITLE;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

const DEFAULT_QUESTIONS: &str = "module10_questions.csv";
const DEFAULT_ESSAYS: &str = "GCAA_Mod10_Essays_All_With_Titles.csv";
const PASS_MARK_PERCENT: u8 = 75;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
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

fn require_path(value: String, flag: &'static str) -> Result<PathBuf, ArgsError> {
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(value))
}

fn parse_number(value: &str, flag: &'static str) -> Result<u32, ArgsError> {
    value
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber {
            flag,
            raw: value.to_owned(),
        })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn essays(&self) -> Arc<EssayService> {
        self.services.essays()
    }

    fn history(&self) -> Arc<HistoryService> {
        self.services.history()
    }

    fn reference(&self) -> Arc<ReferenceService> {
        self.services.reference()
    }

    fn assistant(&self) -> Arc<AssistantService> {
        self.services.assistant()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(DesktopLinkOpener)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    questions: PathBuf,
    essays: PathBuf,
    guides_dir: PathBuf,
    downloads_dir: PathBuf,
    sample_size: u32,
    time_limit_secs: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--questions <csv>] [--essays <csv>] [--guides <dir>] \
         [--downloads <dir>] [--sample-size <n>] [--time-limit <secs>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTIONS}");
    eprintln!("  --essays {DEFAULT_ESSAYS}");
    eprintln!("  --guides .  --downloads .");
    eprintln!("  --sample-size 20  --time-limit 1200");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_QUESTIONS_PATH, STUDY_ESSAYS_PATH, STUDY_GUIDES_DIR,");
    eprintln!("  STUDY_DOWNLOADS_DIR, STUDY_SAMPLE_SIZE, STUDY_TIME_LIMIT_SECS, RUST_LOG");
    eprintln!("  STUDY_AI_API_KEY, STUDY_AI_BASE_URL, STUDY_AI_MODEL  (question assistant)");
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let defaults = QuizSettings::exam_defaults();
        let env_number = |key: &'static str, default: u32| {
            env(key).map_or(Ok(default), |value| parse_number(&value, key))
        };
        let mut parsed = Self {
            questions: env("STUDY_QUESTIONS_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_QUESTIONS), PathBuf::from),
            essays: env("STUDY_ESSAYS_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_ESSAYS), PathBuf::from),
            guides_dir: env("STUDY_GUIDES_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from),
            downloads_dir: env("STUDY_DOWNLOADS_DIR")
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
            sample_size: env_number("STUDY_SAMPLE_SIZE", defaults.sample_size())?,
            time_limit_secs: env_number("STUDY_TIME_LIMIT_SECS", defaults.time_limit_secs())?,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    parsed.questions = require_path(require_value(args, "--questions")?, "--questions")?;
                }
                "--essays" => {
                    parsed.essays = require_path(require_value(args, "--essays")?, "--essays")?;
                }
                "--guides" => {
                    parsed.guides_dir = require_path(require_value(args, "--guides")?, "--guides")?;
                }
                "--downloads" => {
                    parsed.downloads_dir =
                        require_path(require_value(args, "--downloads")?, "--downloads")?;
                }
                "--sample-size" => {
                    let value = require_value(args, "--sample-size")?;
                    parsed.sample_size = parse_number(&value, "--sample-size")?;
                }
                "--time-limit" => {
                    let value = require_value(args, "--time-limit")?;
                    parsed.time_limit_secs = parse_number(&value, "--time-limit")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn quiz_settings(&self) -> Result<QuizSettings, study_core::model::SettingsError> {
        QuizSettings::new(self.sample_size, self.time_limit_secs, PASS_MARK_PERCENT)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::info!(
        questions = %parsed.questions.display(),
        essays = %parsed.essays.display(),
        "starting study buddy"
    );

    let settings = parsed.quiz_settings()?;
    let storage = Storage::sheets(&parsed.questions, &parsed.essays);
    let reference = ReferenceService::new(&parsed.guides_dir, &parsed.downloads_dir);
    let assistant = AssistantService::from_env();
    if !assistant.enabled() {
        tracing::info!("STUDY_AI_API_KEY not set; question assistant disabled");
    }
    let services = AppServices::new(
        &storage,
        Clock::default_clock(),
        settings,
        reference,
        assistant,
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_TITLE)
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
