mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use persona_core::impls::FsArtifactSource;
use persona_core::{ClassifierLoader, PersonaError, Predictor};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "persona",
    version,
    about = "Predict Introvert / Extrovert from two yes/no questions."
)]
struct Cli {
    #[arg(
        long,
        value_name = "Yes|No",
        help = render::DRAINED_QUESTION,
        long_help = render::DRAINED_HELP
    )]
    drained: String,

    #[arg(
        long,
        value_name = "Yes|No",
        help = render::STAGE_FEAR_QUESTION,
        long_help = render::STAGE_FEAR_HELP
    )]
    stage_fear: String,

    /// Path to the model artifact (default: model/best_logistic_regression_model.json).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Config file (default: ./persona.toml if present).
    #[arg(long, env = "PERSONA_CONFIG")]
    config: Option<PathBuf>,

    /// Treat unrecognized answers as "No" instead of rejecting them.
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Log filter, e.g. "info" or "persona_core=debug". Takes precedence over RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn real_main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("resolve current directory")?;
    let file_config = config::load_or_default(cli.config.as_deref(), &cwd)?;
    let settings = Settings::merge(file_config, cli.model, cli.lenient, cli.log_level);

    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, ignored) =
        log_filter(settings.log_flag.as_deref(), rust_log.as_deref(), &settings.log_level)?;
    if let Some(reason) = ignored {
        eprintln!("warning: ignoring RUST_LOG: {reason}");
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(?settings, "resolved settings");

    let loader = ClassifierLoader::new(FsArtifactSource::new(&settings.model_path));
    let predictor = Predictor::new(Arc::new(loader));

    let prediction = match predictor
        .predict_raw(&cli.stage_fear, &cli.drained, settings.policy)
        .await
    {
        Ok(p) => p,
        Err(e) => {
            debug!(error = %e, "request failed");
            eprintln!("{}", user_message(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    let out = match cli.format {
        OutputFormat::Text => render::render_text(&prediction),
        OutputFormat::Json => render::render_json(&prediction).context("serialize prediction")?,
    };
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}

/// ログのフィルタを決める: `--log-level` > RUST_LOG > 設定ファイル / デフォルト
///
/// RUST_LOG が解釈できない場合は読み飛ばし、その理由を 2 つ目の値で返す。
/// `--log-level` と設定ファイルの値が不正ならエラー。
fn log_filter(
    flag: Option<&str>,
    rust_log: Option<&str>,
    configured: &str,
) -> anyhow::Result<(EnvFilter, Option<String>)> {
    if let Some(flag) = flag {
        let filter = EnvFilter::try_new(flag)
            .with_context(|| format!("invalid --log-level '{flag}'"))?;
        return Ok((filter, None));
    }

    let mut ignored = None;
    if let Some(env) = rust_log.filter(|s| !s.trim().is_empty()) {
        match EnvFilter::try_new(env) {
            Ok(filter) => return Ok((filter, None)),
            Err(e) => ignored = Some(format!("'{env}' is not a valid filter ({e})")),
        }
    }

    let filter = EnvFilter::try_new(configured)
        .with_context(|| format!("invalid log level '{configured}'"))?;
    Ok((filter, ignored))
}

/// エラーを利用者向けの 1 行メッセージにする
fn user_message(err: &PersonaError) -> String {
    match err {
        PersonaError::Load(e) => {
            format!("Failed to load the model. Please check if the model file exists. ({e})")
        }
        PersonaError::Prediction(e) => format!("Error making prediction: {e}"),
        PersonaError::Input(e) => format!("Invalid input: {e}"),
    }
}
