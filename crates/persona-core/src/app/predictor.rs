//! Predictor - 1 回の送信を Prediction に変換する
//!
//! # フロー
//! 1. ClassifierLoader から classifier を取得（失敗したら何もせず LoadError）
//! 2. 回答を Answer に変換（raw 文字列の場合のみ、AnswerPolicy に従う）
//! 3. encode → FeatureVector
//! 4. classifier.predict → Label
//! 5. Prediction（id, 時刻つき）を返す
//!
//! どの失敗もこのリクエストだけを中断し、loader のキャッシュには影響しない。

use std::sync::Arc;

use crate::app::ClassifierLoader;
use crate::domain::{AnswerPolicy, Answers, FeatureVector, PersonaError, Prediction};
use crate::ports::{Classifier, Clock, IdGenerator, SystemClock, UlidGenerator, predict};

pub struct Predictor {
    loader: Arc<ClassifierLoader>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Predictor {
    pub fn new(loader: Arc<ClassifierLoader>) -> Self {
        Self {
            loader,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UlidGenerator::new(SystemClock)),
        }
    }

    /// 時刻と ID の timestamp を固定したいとき（テスト用）
    pub fn with_clock<C: Clock + Clone + 'static>(mut self, clock: C) -> Self {
        self.ids = Arc::new(UlidGenerator::new(clock.clone()));
        self.clock = Arc::new(clock);
        self
    }

    pub fn loader(&self) -> &ClassifierLoader {
        &self.loader
    }

    /// 型付きの回答から予測する
    pub async fn predict(&self, answers: Answers) -> Result<Prediction, PersonaError> {
        let classifier = self.loader.load().await?;
        self.run(classifier.as_ref(), answers)
    }

    /// フォームの生の値から予測する
    ///
    /// classifier のロードを先に行うため、モデルがない場合は入力の検証まで進まない。
    pub async fn predict_raw(
        &self,
        stage_fear: &str,
        drained_after_socializing: &str,
        policy: AnswerPolicy,
    ) -> Result<Prediction, PersonaError> {
        let classifier = self.loader.load().await?;
        let answers = Answers::parse(stage_fear, drained_after_socializing, policy)?;
        self.run(classifier.as_ref(), answers)
    }

    fn run(&self, classifier: &dyn Classifier, answers: Answers) -> Result<Prediction, PersonaError> {
        let id = self.ids.generate_request_id();
        let features = FeatureVector::from_answers(&answers);
        tracing::debug!(request_id = %id, ?features, "encoded answers");

        let label = predict(classifier, &features)?;
        tracing::info!(
            request_id = %id,
            stage_fear = %answers.stage_fear,
            drained_after_socializing = %answers.drained_after_socializing,
            %label,
            "prediction complete"
        );

        Ok(Prediction {
            id,
            answers,
            features,
            label,
            predicted_at: self.clock.now(),
        })
    }
}
