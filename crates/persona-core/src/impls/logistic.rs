//! LogisticRegression - 2 クラスのロジスティック回帰
//!
//! 学習側で書き出した JSON artifact を読み込んで推論だけを行う。
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "model": "logistic_regression",
//!   "feature_names": ["Drained_after_socializing_No", "..."],
//!   "coefficients": [-1.9, 1.9, -1.7, 1.7],
//!   "intercept": 0.0,
//!   "classes": ["Extrovert", "Introvert"]
//! }
//! ```
//!
//! 判定: `z = intercept + Σ coef_i * x_i` が正なら `classes[1]`、それ以外は `classes[0]`。

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureVector, Label, LoadError, PredictionError};
use crate::ports::Classifier;

pub const MODEL_KIND: &str = "logistic_regression";

/// artifact の JSON 表現
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionArtifact {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    /// [negative, positive]
    classes: [Label; 2],
}

impl LogisticRegression {
    /// artifact を検証して LogisticRegression を作る
    ///
    /// `location` はエラーメッセージ用。
    pub fn from_artifact(
        artifact: LogisticRegressionArtifact,
        location: &str,
    ) -> Result<Self, LoadError> {
        let incompatible = |message: String| LoadError::Incompatible {
            path: location.to_string(),
            message,
        };

        if artifact.coefficients.len() != artifact.feature_names.len() {
            return Err(incompatible(format!(
                "{} coefficients for {} features",
                artifact.coefficients.len(),
                artifact.feature_names.len()
            )));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(incompatible("non-finite model parameters".to_string()));
        }

        let [negative, positive] = artifact.classes.as_slice() else {
            return Err(incompatible(format!(
                "expected 2 classes, found {}",
                artifact.classes.len()
            )));
        };
        let negative: Label = negative.parse().map_err(|e| incompatible(format!("{e}")))?;
        let positive: Label = positive.parse().map_err(|e| incompatible(format!("{e}")))?;
        if negative == positive {
            return Err(incompatible(format!("duplicate class '{negative}'")));
        }

        Ok(Self {
            feature_names: artifact.feature_names,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
            classes: [negative, positive],
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// 線形スコア z（sigmoid 前）
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let same_columns = self.feature_names.len() == features.len()
            && self
                .feature_names
                .iter()
                .zip(features.names())
                .all(|(trained, given)| trained == given);
        if !same_columns {
            return Err(PredictionError::FeatureMismatch {
                expected: self.feature_names.clone(),
                actual: features.names().iter().map(|n| n.to_string()).collect(),
            });
        }

        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.values())
                .map(|(w, x)| w * x)
                .sum::<f64>();
        if !z.is_finite() {
            return Err(PredictionError::NonFinite(z));
        }
        Ok(z)
    }

    /// 正クラス（`classes[1]`）の確率
    pub fn positive_probability(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let z = self.decision_function(features)?;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, features: &FeatureVector) -> Result<Label, PredictionError> {
        let z = self.decision_function(features)?;
        let [negative, positive] = self.classes;
        Ok(if z > 0.0 { positive } else { negative })
    }

    fn name(&self) -> &str {
        MODEL_KIND
    }
}
