//! persona-core
//!
//! 2 つの質問（人前で緊張するか / 人付き合いの後に疲れるか）から
//! Introvert / Extrovert を予測するためのコア部品。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（answer, features, label, ids, prediction, errors）
//! - **ports**: 抽象化レイヤー（Classifier, ArtifactSource, Clock, IdGenerator）
//! - **impls**: 実装（FsArtifactSource, LogisticRegression, FixedLabelClassifier）
//! - **app**: アプリケーションロジック（ClassifierLoader, Predictor）

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;

pub use self::app::{ClassifierLoader, Predictor};
pub use self::domain::{
    Answer, AnswerPolicy, Answers, FeatureVector, InputError, Label, LoadError, PersonaError,
    Prediction, PredictionError, encode,
};
pub use self::ports::{Classifier, predict};
