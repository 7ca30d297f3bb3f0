use thiserror::Error;
use uuid::Uuid;

use talentflow_core::error::CoreError;
use talentflow_storage::error::StorageError;

/// Why the builder refused a question draft or a save.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("question prompt is required")]
    BlankPrompt,

    #[error("select the correct answer for this multiple-choice question")]
    MissingCorrectAnswer,

    #[error("multiple-choice questions need at least one option")]
    NoOptions,

    #[error("option {index} is blank")]
    BlankOption { index: usize },

    #[error("correct answer {index} does not exist (question has {options} options)")]
    CorrectAnswerOutOfRange { index: usize, options: usize },

    #[error("questions must be worth at least one point")]
    ZeroPoints,

    #[error("assessment title is required")]
    BlankTitle,

    #[error("select a job for this assessment")]
    NoJobSelected,

    #[error("add at least one question")]
    NoQuestions,

    #[error("{count} multiple-choice question(s) are missing correct answers")]
    IncompleteQuestions { count: usize },

    #[error("{count} question(s) are worth zero points")]
    ZeroPointQuestions { count: usize },

    #[error("passing score {0} is above 100")]
    PassingScoreOutOfRange(u8),

    #[error("job {0} is not an open job owned by this recruiter")]
    UnknownJob(Uuid),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("assessment {assessment_id} has no achievable points")]
    NoAchievablePoints { assessment_id: Uuid },
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("assessment {0} is not published")]
    NotActive(Uuid),

    #[error("assessment {0} has no questions")]
    NoQuestions(Uuid),

    #[error("session already started")]
    AlreadyStarted,

    #[error("session is not in progress")]
    NotInProgress,

    #[error("{remaining} question(s) not reached yet")]
    QuestionsRemaining { remaining: usize },

    #[error("question {0} is not part of this assessment")]
    UnknownQuestion(Uuid),

    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] CoreError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Errors from the service-level operations that touch storage.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("candidate {candidate_id} already completed assessment {assessment_id}")]
    AlreadyCompleted {
        assessment_id: Uuid,
        candidate_id: Uuid,
    },

    #[error("assessment {assessment_id} is not owned by {owner_id}")]
    NotOwner { assessment_id: Uuid, owner_id: Uuid },
}
