use crate::domain::{FeatureVector, Label, PredictionError};
use crate::ports::Classifier;

/// FixedLabelClassifier は入力に関係なく同じ Label を返す
///
/// テストとデモ用。artifact なしで Predictor を動かせる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLabelClassifier(pub Label);

impl Classifier for FixedLabelClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<Label, PredictionError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed_label"
    }
}
