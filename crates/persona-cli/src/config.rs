//! 設定ファイル（persona.toml）の読み込み
//!
//! 優先順位: CLI 引数 > 設定ファイル > デフォルト値
//! （ログのフィルタだけは CLI 引数 > RUST_LOG > 設定ファイル > デフォルト値）

use std::path::{Path, PathBuf};

use anyhow::Context;
use persona_core::AnswerPolicy;
use persona_core::impls::FsArtifactSource;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "persona.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersonaConfig {
    pub model: ModelConfig,
    pub input: InputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// artifact のパス。未指定なら `model/` 配下のデフォルト
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub policy: AnswerPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// EnvFilter の書式（"warn", "persona_core=debug" など）
    pub level: Option<String>,
}

pub fn parse_config(contents: &str) -> anyhow::Result<PersonaConfig> {
    toml::from_str::<PersonaConfig>(contents).context("invalid TOML")
}

/// ファイルから読み込む
///
/// 相対パスの `model.path` は設定ファイルのあるディレクトリ基準に直す。
pub fn load_config(path: &Path) -> anyhow::Result<PersonaConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let mut config = parse_config(&contents)
        .with_context(|| format!("parse config file {}", path.display()))?;

    let base = path.parent().unwrap_or(Path::new(""));
    config.model.path = config
        .model
        .path
        .map(|p| if p.is_relative() { base.join(p) } else { p });
    Ok(config)
}

/// 明示されたパス、またはカレントディレクトリの persona.toml を読む
///
/// 明示されたパスが存在しない場合はエラー。暗黙の persona.toml がなければデフォルト。
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<PersonaConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let path = cwd.join(CONFIG_FILE_NAME);
            if path.exists() {
                load_config(&path)
            } else {
                Ok(PersonaConfig::default())
            }
        }
    }
}

/// CLI 引数と設定ファイルをマージした結果
///
/// ログだけは RUST_LOG が間に入るため、CLI の指定（`log_flag`）と
/// 設定ファイル / デフォルト（`log_level`）を分けて持つ。
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model_path: PathBuf,
    pub policy: AnswerPolicy,
    pub log_flag: Option<String>,
    pub log_level: String,
}

pub const DEFAULT_LOG_LEVEL: &str = "warn";

impl Settings {
    pub fn merge(
        file: PersonaConfig,
        model_path: Option<PathBuf>,
        lenient: bool,
        log_level: Option<String>,
    ) -> Self {
        Self {
            model_path: model_path
                .or(file.model.path)
                .unwrap_or_else(|| PathBuf::from(FsArtifactSource::DEFAULT_PATH)),
            policy: if lenient {
                AnswerPolicy::FallbackToNo
            } else {
                file.input.policy
            },
            log_flag: log_level,
            log_level: file
                .log
                .level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
