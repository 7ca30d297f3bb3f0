use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::answer::Answer;

/// Lowest rating a candidate may give.
pub const RATING_MIN: u8 = 1;

/// Highest rating a candidate may give.
pub const RATING_MAX: u8 = 5;

/// One evaluable prompt within an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub points: u32,
    /// Advisory only. The runner enforces the assessment-level duration.
    #[serde(default)]
    pub time_limit_seconds: Option<u32>,
}

/// Type-specific payload of a question, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        #[serde(default)]
        correct_answer_index: Option<usize>,
    },
    Text,
    Rating,
    Integer,
}

/// The bare question type, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionType {
    MultipleChoice,
    Text,
    Rating,
    Integer,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Text => "text",
            QuestionType::Rating => "rating",
            QuestionType::Integer => "integer",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple-choice" => Ok(QuestionType::MultipleChoice),
            "text" => Ok(QuestionType::Text),
            "rating" => Ok(QuestionType::Rating),
            "integer" => Ok(QuestionType::Integer),
            other => Err(CoreError::UnknownVariant {
                kind: "question type",
                value: other.to_string(),
            }),
        }
    }
}

impl QuestionKind {
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionKind::Text => QuestionType::Text,
            QuestionKind::Rating => QuestionType::Rating,
            QuestionKind::Integer => QuestionType::Integer,
        }
    }
}

impl Question {
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// Correct option for a multiple-choice question, if one is set.
    pub fn correct_answer_index(&self) -> Option<usize> {
        match &self.kind {
            QuestionKind::MultipleChoice {
                correct_answer_index,
                ..
            } => *correct_answer_index,
            _ => None,
        }
    }

    /// Whether the question is ready to be persisted.
    ///
    /// Only multiple-choice questions can be incomplete: they need at least
    /// one option, no blank options, and a correct index within range.
    pub fn is_complete(&self) -> bool {
        match &self.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_answer_index,
            } => {
                !options.is_empty()
                    && options.iter().all(|o| !o.trim().is_empty())
                    && correct_answer_index.is_some_and(|i| i < options.len())
            }
            _ => true,
        }
    }

    /// Check that `answer` has the shape this question expects.
    pub fn check_answer(&self, answer: &Answer) -> Result<(), CoreError> {
        let expected = self.question_type();
        let actual = answer.answer_type();
        if expected != actual {
            return Err(CoreError::AnswerTypeMismatch { expected, actual });
        }

        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice { options, .. }, Answer::Choice(index))
                if *index >= options.len() =>
            {
                Err(CoreError::OptionOutOfRange {
                    index: *index,
                    options: options.len(),
                })
            }
            (QuestionKind::Rating, Answer::Rating(value))
                if !(RATING_MIN..=RATING_MAX).contains(value) =>
            {
                Err(CoreError::RatingOutOfRange(*value))
            }
            _ => Ok(()),
        }
    }
}
