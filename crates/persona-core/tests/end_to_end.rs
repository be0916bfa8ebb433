use std::sync::Arc;

use persona_core::domain::{Answer, Answers, Label, LoadError, PersonaError};
use persona_core::impls::{FixedLabelClassifier, FsArtifactSource};
use persona_core::{AnswerPolicy, ClassifierLoader, Predictor};

#[tokio::test]
async fn drained_yes_stage_fear_no_round_trip() {
    let loader = ClassifierLoader::with_classifier(Arc::new(FixedLabelClassifier(Label::Introvert)));
    let predictor = Predictor::new(Arc::new(loader));

    let p = predictor
        .predict_raw("No", "Yes", AnswerPolicy::Strict)
        .await
        .unwrap();

    assert_eq!(p.features.get("Drained_after_socializing_Yes"), Some(1.0));
    assert_eq!(p.features.get("Drained_after_socializing_No"), Some(0.0));
    assert_eq!(p.features.get("Stage_fear_No"), Some(1.0));
    assert_eq!(p.features.get("Stage_fear_Yes"), Some(0.0));
    assert_eq!(p.label, Label::Introvert);
}

#[tokio::test]
async fn bundled_model_separates_the_extremes() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../model/best_logistic_regression_model.json");
    let predictor = Predictor::new(Arc::new(ClassifierLoader::new(FsArtifactSource::new(path))));

    let introvert = predictor
        .predict(Answers::new(Answer::Yes, Answer::Yes))
        .await
        .unwrap();
    let extrovert = predictor
        .predict(Answers::new(Answer::No, Answer::No))
        .await
        .unwrap();

    assert_eq!(introvert.label, Label::Introvert);
    assert_eq!(extrovert.label, Label::Extrovert);
}

#[tokio::test]
async fn missing_model_never_reaches_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let loader = Arc::new(ClassifierLoader::new(FsArtifactSource::new(
        dir.path().join("best_logistic_regression_model.json"),
    )));
    let predictor = Predictor::new(Arc::clone(&loader));

    let err = predictor
        .predict(Answers::new(Answer::Yes, Answer::No))
        .await
        .unwrap_err();

    assert!(matches!(err, PersonaError::Load(LoadError::NotFound { .. })));
    assert!(predictor.loader().is_initialized());
}

#[tokio::test]
async fn prediction_serializes_for_json_output() {
    let loader = ClassifierLoader::with_classifier(Arc::new(FixedLabelClassifier(Label::Extrovert)));
    let predictor = Predictor::new(Arc::new(loader));

    let p = predictor
        .predict(Answers::new(Answer::No, Answer::No))
        .await
        .unwrap();
    let v = serde_json::to_value(&p).unwrap();

    assert_eq!(v["label"], "Extrovert");
    assert_eq!(v["answers"]["stage_fear"], "No");
    assert_eq!(v["features"]["Stage_fear_No"], 1.0);
    assert!(v["id"].is_string());
}
