use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::PredictionError;

/// Classifier の出力クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Introvert,
    Extrovert,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Introvert => "Introvert",
            Label::Extrovert => "Extrovert",
        }
    }
}

impl FromStr for Label {
    type Err = PredictionError;

    /// artifact の classes 文字列をそのまま受け取る（大文字小文字を区別）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Introvert" => Ok(Label::Introvert),
            "Extrovert" => Ok(Label::Extrovert),
            other => Err(PredictionError::UnknownClass(other.to_string())),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
