//! Impls - ports の実装
//!
//! - FsArtifactSource: ローカルファイルの artifact
//! - LogisticRegression: JSON artifact から作る分類器
//! - FixedLabelClassifier: 常に同じ Label を返す（テスト・デモ用）

pub mod decode;
pub mod fixed;
pub mod fs_artifact;
pub mod logistic;

pub use self::decode::decode_classifier;
pub use self::fixed::FixedLabelClassifier;
pub use self::fs_artifact::FsArtifactSource;
pub use self::logistic::{LogisticRegression, LogisticRegressionArtifact};
