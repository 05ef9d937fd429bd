use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuizSettings;
use quiz_core::{Catalog, Clock};
use services::{CertificateExporter, FileCertificateExporter};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, DesktopCertificateOpener, UiApp, build_app_context};

/// App SDK privacy quiz
#[derive(Parser, Debug)]
#[command(name = "app-sdk-quiz")]
#[command(about = "Timed App SDK quiz with a downloadable certificate")]
#[command(version)]
struct Args {
    /// Seconds on the countdown when a quiz starts
    #[arg(long, env = "QUIZ_TIME_LIMIT_SECS", default_value_t = QuizSettings::DEFAULT_TIME_LIMIT_SECS)]
    time_limit: u32,

    /// How long answer feedback stays up before the next question, in milliseconds
    #[arg(long, env = "QUIZ_FEEDBACK_DELAY_MS", default_value_t = 1500)]
    feedback_delay_ms: u64,

    /// Where certificates are written (defaults to the download directory)
    #[arg(long, env = "QUIZ_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// Save certificates without opening them in the system viewer
    #[arg(long)]
    no_open: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn settings(&self) -> Result<QuizSettings, quiz_core::Error> {
        Ok(QuizSettings::new(
            self.time_limit,
            Duration::from_millis(self.feedback_delay_ms),
            QuizSettings::DEFAULT_TICK_INTERVAL,
        )?)
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    exporter: Arc<dyn CertificateExporter>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }

    fn certificate_exporter(&self) -> Arc<dyn CertificateExporter> {
        Arc::clone(&self.exporter)
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.settings()?;
    let catalog = Arc::new(Catalog::builtin()?);

    let export_dir = args.export_dir();
    let mut exporter = FileCertificateExporter::new(export_dir);
    if !args.no_open {
        exporter = exporter.with_opener(Arc::new(DesktopCertificateOpener));
    }
    info!(
        time_limit = settings.time_limit_secs(),
        feedback_delay = ?settings.feedback_delay(),
        export_dir = %exporter.dir().display(),
        questions = catalog.question_count(),
        "starting quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        settings,
        exporter: Arc::new(exporter),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("App SDK Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(err) = run(args) {
        tracing::error!(error = %err, "quiz failed to start");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
