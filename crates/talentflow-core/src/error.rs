use thiserror::Error;

use crate::models::question::QuestionType;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("expected a {expected} answer, got {actual}")]
    AnswerTypeMismatch {
        expected: QuestionType,
        actual: QuestionType,
    },

    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),

    #[error("option {index} does not exist (question has {options} options)")]
    OptionOutOfRange { index: usize, options: usize },
}
