use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionBank;
use quiz_core::report::{DEFAULT_DISTINCTION_THRESHOLD, DEFAULT_PASS_THRESHOLD, ReportPolicy};
use services::{Clock, ShareService};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, DesktopMailComposer, UiApp, WebviewClipboard, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidThreshold { flag: &'static str, raw: String },
    InvalidBankPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidThreshold { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw:?}"),
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

fn parse_threshold(flag: &'static str, raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidThreshold { flag, raw })
}

struct DesktopApp {
    bank: Arc<QuestionBank>,
    share: Arc<ShareService>,
}

impl UiApp for DesktopApp {
    fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn share(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }
}

struct Args {
    bank_path: Option<PathBuf>,
    pass_threshold: u32,
    distinction_threshold: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path>] [--pass-threshold <n>] [--distinction-threshold <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank                   built-in question bank");
    eprintln!("  --pass-threshold         {DEFAULT_PASS_THRESHOLD}");
    eprintln!("  --distinction-threshold  {DEFAULT_DISTINCTION_THRESHOLD}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK_PATH, QUIZ_PASS_THRESHOLD, QUIZ_DISTINCTION_THRESHOLD, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    /// Flags win over environment values; environment values win over defaults.
    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut bank_path = env("QUIZ_BANK_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut pass_threshold =
            env_threshold(&env, "QUIZ_PASS_THRESHOLD", DEFAULT_PASS_THRESHOLD)?;
        let mut distinction_threshold = env_threshold(
            &env,
            "QUIZ_DISTINCTION_THRESHOLD",
            DEFAULT_DISTINCTION_THRESHOLD,
        )?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    bank_path = Some(PathBuf::from(value));
                }
                "--pass-threshold" => {
                    let value = require_value(args, "--pass-threshold")?;
                    pass_threshold = parse_threshold("--pass-threshold", value)?;
                }
                "--distinction-threshold" => {
                    let value = require_value(args, "--distinction-threshold")?;
                    distinction_threshold = parse_threshold("--distinction-threshold", value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            bank_path,
            pass_threshold,
            distinction_threshold,
        })
    }
}

// Unset or blank falls back to the default; anything else must parse.
fn env_threshold(
    env: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u32,
) -> Result<u32, ArgsError> {
    match env(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => parse_threshold(key, value),
        None => Ok(default),
    }
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuestionBank::builtin()?);
    };
    let raw = std::fs::read_to_string(path).map_err(|err| {
        std::io::Error::new(
            err.kind(),
            format!("cannot read question bank {}: {err}", path.display()),
        )
    })?;
    Ok(QuestionBank::from_json(&raw)?)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = log_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let bank = load_bank(parsed.bank_path.as_deref())?;
    let policy = ReportPolicy::new(parsed.pass_threshold, parsed.distinction_threshold)?;
    info!(
        title = bank.title(),
        questions = bank.len(),
        pass = policy.pass_threshold(),
        distinction = policy.distinction_threshold(),
        "question bank loaded"
    );

    let share = ShareService::new(
        Clock::default_clock(),
        policy,
        Arc::new(WebviewClipboard),
        Arc::new(DesktopMailComposer),
    );
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: Arc::new(bank),
        share: Arc::new(share),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Тестирование по СОП")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
