//! Classifier port - 学習済みモデルの抽象化
//!
//! モデルの中身（ロジスティック回帰など）は隠蔽し、
//! `FeatureVector -> Label` だけを公開する。

use crate::domain::{FeatureVector, Label, PredictionError};

/// Classifier は FeatureVector から Label を予測する
///
/// # 設計原則
/// - 読み取り専用（`&self`）。ロード後は変更しない
/// - `Send + Sync`: `Arc<dyn Classifier>` として複数タスクから共有する
/// - 失敗は `PredictionError` で返す（panic しない）
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Label, PredictionError>;

    /// ログ用の短い名前
    fn name(&self) -> &str {
        "classifier"
    }
}

/// classifier を 1 回呼び出す
///
/// 失敗はログに残して呼び出し側に返す。キャッシュ済みの classifier には触らない。
pub fn predict(
    classifier: &dyn Classifier,
    features: &FeatureVector,
) -> Result<Label, PredictionError> {
    classifier.predict(features).inspect_err(|e| {
        tracing::error!(classifier = classifier.name(), error = %e, "prediction failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Answer, encode};

    struct Failing;

    impl Classifier for Failing {
        fn predict(&self, _features: &FeatureVector) -> Result<Label, PredictionError> {
            Err(PredictionError::Classifier("boom".into()))
        }
    }

    struct DrainedMeansIntrovert;

    impl Classifier for DrainedMeansIntrovert {
        fn predict(&self, features: &FeatureVector) -> Result<Label, PredictionError> {
            match features.get("Drained_after_socializing_Yes") {
                Some(v) if v == 1.0 => Ok(Label::Introvert),
                _ => Ok(Label::Extrovert),
            }
        }
    }

    #[test]
    fn predict_passes_through_label() {
        let fv = encode(Answer::No, Answer::Yes);
        assert_eq!(predict(&DrainedMeansIntrovert, &fv).unwrap(), Label::Introvert);
    }

    #[test]
    fn predict_is_repeatable_on_same_classifier() {
        let fv = encode(Answer::Yes, Answer::No);
        let first = predict(&DrainedMeansIntrovert, &fv).unwrap();
        let second = predict(&DrainedMeansIntrovert, &fv).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn predict_returns_classifier_error_with_message() {
        let fv = encode(Answer::Yes, Answer::Yes);
        let err = predict(&Failing, &fv).unwrap_err();
        assert_eq!(err, PredictionError::Classifier("boom".into()));
        assert!(err.to_string().contains("boom"));
    }
}
