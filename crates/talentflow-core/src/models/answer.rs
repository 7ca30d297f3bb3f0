use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::question::QuestionType;

/// A candidate's answer to one question. The variant must match the
/// question's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    /// Index of the selected option.
    Choice(usize),
    Text(String),
    /// 1 through 5.
    Rating(u8),
    Integer(i64),
}

impl Answer {
    pub fn answer_type(&self) -> QuestionType {
        match self {
            Answer::Choice(_) => QuestionType::MultipleChoice,
            Answer::Text(_) => QuestionType::Text,
            Answer::Rating(_) => QuestionType::Rating,
            Answer::Integer(_) => QuestionType::Integer,
        }
    }

    /// True for whitespace-only text. Numeric answers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}
