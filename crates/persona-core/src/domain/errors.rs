//! Errors - 失敗の分類
//!
//! - `LoadError`: artifact が読めない / 壊れている（起動時に一度だけ発生しうる）
//! - `PredictionError`: 推論中の失敗（リクエスト単位、キャッシュ済みモデルは無効化しない）
//! - `InputError`: Strict ポリシー下での未知の回答
//!
//! いずれもプロセスを落とさず、呼び出し側で表示用メッセージに変換する。

use thiserror::Error;

/// LoadError は artifact の読み込み失敗
///
/// ClassifierLoader が結果ごとキャッシュするため `Clone` を実装する。
/// 元の `io::Error` などはメッセージとして保持する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("model artifact not found at {path}")]
    NotFound { path: String },

    #[error("model artifact at {path} is unreadable: {message}")]
    Unreadable { path: String, message: String },

    #[error("model artifact at {path} is malformed: {message}")]
    Malformed { path: String, message: String },

    #[error("model artifact at {path} is incompatible: {message}")]
    Incompatible { path: String, message: String },
}

/// PredictionError は classifier が推論中に返したエラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("feature mismatch: model was trained on {expected:?}, got {actual:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("non-finite decision score: {0}")]
    NonFinite(f64),

    #[error("model produced unknown class '{0}'")]
    UnknownClass(String),

    #[error("classifier failed: {0}")]
    Classifier(String),
}

/// InputError は回答文字列の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unrecognized answer for {field}: '{value}' (expected 'Yes' or 'No')")]
    UnrecognizedAnswer { field: &'static str, value: String },
}

/// PersonaError は Predictor の 1 リクエストが失敗しうる全パターン
#[derive(Debug, Clone, Error)]
pub enum PersonaError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Input(#[from] InputError),
}
