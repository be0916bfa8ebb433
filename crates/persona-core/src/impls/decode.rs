//! artifact bytes -> Classifier
//!
//! 先にヘッダ（format_version, model）だけを読んで、対応する実装にデコードを委ねる。

use std::sync::Arc;

use serde::Deserialize;

use super::logistic::{LogisticRegression, LogisticRegressionArtifact, MODEL_KIND};
use crate::domain::LoadError;
use crate::ports::Classifier;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct ArtifactHeader {
    format_version: u32,
    model: String,
}

pub fn decode_classifier(bytes: &[u8], location: &str) -> Result<Arc<dyn Classifier>, LoadError> {
    let malformed = |e: serde_json::Error| LoadError::Malformed {
        path: location.to_string(),
        message: e.to_string(),
    };

    let header: ArtifactHeader = serde_json::from_slice(bytes).map_err(malformed)?;
    if header.format_version != FORMAT_VERSION {
        return Err(LoadError::Incompatible {
            path: location.to_string(),
            message: format!(
                "format_version {} is not supported (expected {FORMAT_VERSION})",
                header.format_version
            ),
        });
    }

    match header.model.as_str() {
        MODEL_KIND => {
            let artifact: LogisticRegressionArtifact =
                serde_json::from_slice(bytes).map_err(malformed)?;
            let model = LogisticRegression::from_artifact(artifact, location)?;
            Ok(Arc::new(model))
        }
        other => Err(LoadError::Incompatible {
            path: location.to_string(),
            message: format!("unknown model kind '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Answer, Label, encode};
    use serde_json::json;

    fn valid() -> serde_json::Value {
        json!({
            "format_version": 1,
            "model": "logistic_regression",
            "feature_names": [
                "Drained_after_socializing_No",
                "Drained_after_socializing_Yes",
                "Stage_fear_No",
                "Stage_fear_Yes"
            ],
            "coefficients": [-1.9, 1.9, -1.7, 1.7],
            "intercept": 0.05,
            "classes": ["Extrovert", "Introvert"]
        })
    }

    #[test]
    fn decodes_logistic_regression() {
        let bytes = serde_json::to_vec(&valid()).unwrap();
        let classifier = decode_classifier(&bytes, "m.json").unwrap();

        assert_eq!(classifier.name(), MODEL_KIND);
        let label = classifier.predict(&encode(Answer::Yes, Answer::Yes)).unwrap();
        assert_eq!(label, Label::Introvert);
    }

    #[test]
    fn garbage_is_malformed() {
        let err = decode_classifier(b"\x80\x04joblib", "m.json").err().unwrap();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn missing_field_is_malformed() {
        let mut v = valid();
        v.as_object_mut().unwrap().remove("intercept");
        let bytes = serde_json::to_vec(&v).unwrap();
        let err = decode_classifier(&bytes, "m.json").err().unwrap();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn newer_format_version_is_incompatible() {
        let mut v = valid();
        v["format_version"] = json!(2);
        let bytes = serde_json::to_vec(&v).unwrap();
        let err = decode_classifier(&bytes, "m.json").err().unwrap();
        assert!(err.to_string().contains("format_version 2"));
    }

    #[test]
    fn unknown_model_kind_is_incompatible() {
        let mut v = valid();
        v["model"] = json!("random_forest");
        let bytes = serde_json::to_vec(&v).unwrap();
        let err = decode_classifier(&bytes, "m.json").err().unwrap();
        assert_eq!(
            err,
            LoadError::Incompatible {
                path: "m.json".into(),
                message: "unknown model kind 'random_forest'".into(),
            }
        );
    }
}
