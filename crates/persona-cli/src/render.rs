//! 予測結果の表示
//!
//! テキスト（人が読む用）と JSON（Prediction をそのまま）の 2 形式。

use persona_core::domain::{Label, Prediction};

pub const TITLE: &str = "🧠 Personality Type Predictor";

pub const INTRO_HEADING: &str = "Welcome to the Personality Type Predictor!";

pub const INTRO: &str = "This application uses machine learning to predict whether you are an \
Introvert or Extrovert based on your responses to two key questions about social interactions \
and stage presence.";

pub const DRAINED_QUESTION: &str = "Do you feel drained after socializing?";
pub const DRAINED_HELP: &str = "Do you typically feel tired or exhausted after social interactions?";

pub const STAGE_FEAR_QUESTION: &str = "Do you experience stage fear?";
pub const STAGE_FEAR_HELP: &str = "Do you feel nervous or anxious about speaking in front of groups?";

pub const NOTE: &str = "💡 Note: This prediction is based on a machine learning model trained on \
specific behavioral patterns. Personality is complex and exists on a spectrum - this is just one \
perspective!";

pub fn description(label: Label) -> &'static str {
    match label {
        Label::Introvert => {
            "You tend to prefer solitary activities and may feel more energized when spending \
             time alone. You likely think before speaking and prefer deep, meaningful \
             conversations over small talk."
        }
        Label::Extrovert => {
            "You tend to be energized by social interactions and may feel more alive when \
             around others. You likely think out loud and enjoy being the center of attention \
             in group settings."
        }
    }
}

pub fn render_text(p: &Prediction) -> String {
    format!(
        "{TITLE}\n\n\
         {INTRO_HEADING}\n\
         {INTRO}\n\n\
         📝 Answer These Questions\n\
         - {DRAINED_QUESTION}\n  {DRAINED_HELP}\n\
         - {STAGE_FEAR_QUESTION}\n  {STAGE_FEAR_HELP}\n\n\
         🎯 Prediction Results\n\n\
         Your Responses:\n\
         - Feel drained after socializing: {drained}\n\
         - Experience stage fear: {stage_fear}\n\n\
         🎭 Your Predicted Personality Type: {label}\n\
         {description}\n\n\
         {NOTE}\n",
        drained = p.answers.drained_after_socializing,
        stage_fear = p.answers.stage_fear,
        label = p.label,
        description = description(p.label),
    )
}

pub fn render_json(p: &Prediction) -> serde_json::Result<String> {
    serde_json::to_string_pretty(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::domain::{Answer, Answers};
    use persona_core::impls::FixedLabelClassifier;
    use persona_core::{ClassifierLoader, Predictor};
    use std::sync::Arc;

    async fn prediction(label: Label, stage_fear: Answer, drained: Answer) -> Prediction {
        let loader = ClassifierLoader::with_classifier(Arc::new(FixedLabelClassifier(label)));
        Predictor::new(Arc::new(loader))
            .predict(Answers::new(stage_fear, drained))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn text_echoes_answers_and_label() {
        let p = prediction(Label::Introvert, Answer::No, Answer::Yes).await;
        let text = render_text(&p);

        assert!(text.starts_with(TITLE));
        assert!(text.contains(INTRO_HEADING));
        assert!(text.contains("two key questions about social interactions and stage presence."));
        assert!(text.contains("- Feel drained after socializing: Yes"));
        assert!(text.contains("- Experience stage fear: No"));
        assert!(text.contains("Your Predicted Personality Type: Introvert"));
        assert!(text.contains(description(Label::Introvert)));
        assert!(!text.contains(description(Label::Extrovert)));
        assert!(text.trim_end().ends_with("perspective!"));
    }

    #[tokio::test]
    async fn text_lists_questions_with_help() {
        let p = prediction(Label::Extrovert, Answer::Yes, Answer::Yes).await;
        let text = render_text(&p);

        assert!(text.contains(&format!("- {DRAINED_QUESTION}\n  {DRAINED_HELP}\n")));
        assert!(text.contains(&format!("- {STAGE_FEAR_QUESTION}\n  {STAGE_FEAR_HELP}\n")));
        let questions = text.find(DRAINED_QUESTION).unwrap();
        let results = text.find("Prediction Results").unwrap();
        assert!(questions < results);
    }

    #[tokio::test]
    async fn extrovert_gets_its_own_description() {
        let p = prediction(Label::Extrovert, Answer::No, Answer::No).await;
        assert!(render_text(&p).contains("energized by social interactions"));
    }

    #[tokio::test]
    async fn json_is_the_prediction_record() {
        let p = prediction(Label::Extrovert, Answer::Yes, Answer::No).await;
        let v: serde_json::Value = serde_json::from_str(&render_json(&p).unwrap()).unwrap();

        assert_eq!(v["label"], "Extrovert");
        assert_eq!(v["answers"]["stage_fear"], "Yes");
        assert_eq!(v["answers"]["drained_after_socializing"], "No");
        assert_eq!(v["features"]["Stage_fear_Yes"], 1.0);
        assert!(v["predicted_at"].is_string());
    }
}
