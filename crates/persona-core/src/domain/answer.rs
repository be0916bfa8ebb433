//! Answer - Yes/No の回答
//!
//! 文字列比較（`== "Yes"`）ではなく 2 値の enum として扱う。
//! 未知の文字列をどう扱うかは `AnswerPolicy` で明示的に選ぶ。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

/// 未知の回答文字列の扱い
///
/// - `Strict`: エラーにする（デフォルト）
/// - `FallbackToNo`: `No` として扱う（旧フォームの挙動との互換用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPolicy {
    #[default]
    Strict,
    FallbackToNo,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    /// 回答文字列を policy に従って解釈する
    ///
    /// `field` はエラーメッセージとログに使う質問名。
    pub fn parse(field: &'static str, raw: &str, policy: AnswerPolicy) -> Result<Self, InputError> {
        match (raw.parse::<Answer>(), policy) {
            (Ok(answer), _) => Ok(answer),
            (Err(_), AnswerPolicy::FallbackToNo) => {
                tracing::warn!(field, value = raw, "unrecognized answer treated as 'No'");
                Ok(Answer::No)
            }
            (Err(_), AnswerPolicy::Strict) => Err(InputError::UnrecognizedAnswer {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

impl FromStr for Answer {
    type Err = InputError;

    /// 大文字小文字を区別する（"yes" は受け付けない）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Answer::Yes),
            "No" => Ok(Answer::No),
            other => Err(InputError::UnrecognizedAnswer {
                field: "answer",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1 回のフォーム送信に相当する回答のペア
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub stage_fear: Answer,
    pub drained_after_socializing: Answer,
}

impl Answers {
    pub const STAGE_FEAR: &'static str = "stage_fear";
    pub const DRAINED_AFTER_SOCIALIZING: &'static str = "drained_after_socializing";

    pub fn new(stage_fear: Answer, drained_after_socializing: Answer) -> Self {
        Self {
            stage_fear,
            drained_after_socializing,
        }
    }

    /// 生の文字列ペアから Answers を作る
    pub fn parse(stage_fear: &str, drained: &str, policy: AnswerPolicy) -> Result<Self, InputError> {
        Ok(Self {
            stage_fear: Answer::parse(Self::STAGE_FEAR, stage_fear, policy)?,
            drained_after_socializing: Answer::parse(
                Self::DRAINED_AFTER_SOCIALIZING,
                drained,
                policy,
            )?,
        })
    }
}
