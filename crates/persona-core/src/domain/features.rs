//! FeatureVector - one-hot エンコード済みの特徴量
//!
//! # キーの順序
//! モデルの学習時と同じ順序でなければならない。
//! 1. `Drained_after_socializing_No`
//! 2. `Drained_after_socializing_Yes`
//! 3. `Stage_fear_No`
//! 4. `Stage_fear_Yes`
//!
//! # 不変条件
//! 各ペア（No/Yes）のうち、ちょうど一方が 1.0 でもう一方が 0.0。
//! `encode` 以外から値を作れないようにしてこれを保証する。

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::answer::{Answer, Answers};

pub const DRAINED_NO: &str = "Drained_after_socializing_No";
pub const DRAINED_YES: &str = "Drained_after_socializing_Yes";
pub const STAGE_FEAR_NO: &str = "Stage_fear_No";
pub const STAGE_FEAR_YES: &str = "Stage_fear_Yes";

/// 学習時の特徴量の並び
pub const FEATURE_NAMES: [&str; 4] = [DRAINED_NO, DRAINED_YES, STAGE_FEAR_NO, STAGE_FEAR_YES];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; 4],
}

/// 2 つの回答を one-hot エンコードする
///
/// 純粋関数。同じ入力には常に同じ出力を返す。
pub fn encode(stage_fear: Answer, drained_after_socializing: Answer) -> FeatureVector {
    let (drained_no, drained_yes) = one_hot(drained_after_socializing);
    let (stage_no, stage_yes) = one_hot(stage_fear);
    FeatureVector {
        values: [drained_no, drained_yes, stage_no, stage_yes],
    }
}

fn one_hot(answer: Answer) -> (f64, f64) {
    match answer {
        Answer::Yes => (0.0, 1.0),
        Answer::No => (1.0, 0.0),
    }
}

impl FeatureVector {
    pub fn from_answers(answers: &Answers) -> Self {
        encode(answers.stage_fear, answers.drained_after_socializing)
    }

    /// 学習時の順序で並んだ値
    pub fn values(&self) -> &[f64; 4] {
        &self.values
    }

    pub fn names(&self) -> &'static [&'static str; 4] {
        &FEATURE_NAMES
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// (name, value) を学習時の順序で返す
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

// pandas の 1 行 DataFrame と同じ「順序付きの name -> value」として出す
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
