//! Prediction - 1 リクエスト分の結果
//!
//! 表示（CLI のテキスト / JSON 出力）とログ出力に使う、シリアライズ可能なビュー。

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::answer::Answers;
use super::features::FeatureVector;
use super::ids::RequestId;
use super::label::Label;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub id: RequestId,
    pub answers: Answers,
    pub features: FeatureVector,
    pub label: Label,
    pub predicted_at: DateTime<Utc>,
}
