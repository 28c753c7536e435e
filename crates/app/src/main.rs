use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::QuizService;
use storage::JsonQuestionBank;
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

const SAMPLE_BANK: &str = include_str!("../assets/questions.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
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
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    questions_path: Option<PathBuf>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <bank.json>]");
    eprintln!();
    eprintln!("Without --questions the bundled sample bank is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_PATH, RUST_LOG");
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env_path: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            questions_path: env_path
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            help: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(&mut args, "--questions")?;
                    parsed.questions_path = Some(questions_path(value)?);
                }
                "--help" | "-h" => parsed.help = true,
                other => match other.strip_prefix("--questions=") {
                    Some(value) => parsed.questions_path = Some(questions_path(value.to_string())?),
                    None => return Err(ArgsError::UnknownArg(arg)),
                },
            }
        }

        Ok(parsed)
    }
}

fn questions_path(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidQuestionsPath { raw });
    }
    Ok(PathBuf::from(raw))
}

fn load_bank(path: Option<&PathBuf>) -> Result<JsonQuestionBank, storage::StorageError> {
    match path {
        Some(path) => JsonQuestionBank::from_path(path),
        None => {
            log::info!("no question bank given, using the bundled sample");
            JsonQuestionBank::from_json_str(SAMPLE_BANK)
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(
        std::env::args().skip(1),
        std::env::var("QUIZ_QUESTIONS_PATH").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if parsed.help {
        print_usage();
        return Ok(());
    }

    // Questions are loaded once up front; the UI only ever reads them.
    let bank = load_bank(parsed.questions_path.as_ref())?;
    let storage = Storage::from_repository(bank.into_repository()?);
    let quiz_service = Arc::new(QuizService::new(Arc::clone(&storage.questions)));

    let topics = quiz_service.list_topics().await?;
    if topics.is_empty() {
        log::warn!("question bank has no topics");
    } else {
        log::info!("loaded {} topics", topics.len());
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_service });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Developing Solutions for Microsoft Azure")
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
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("{err}");
        std::process::exit(2);
    }
}
