use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use talentflow_core::models::answer::Answer;
use talentflow_core::models::assessment::Assessment;
use talentflow_core::models::question::Question;

use crate::error::RunnerError;
use crate::scoring::{self, ScoreCard};

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubmitReason {
    Manual,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    NotStarted,
    InProgress {
        cursor: usize,
        /// Highest question index the candidate has reached.
        furthest: usize,
        answers: HashMap<Uuid, Answer>,
        remaining_seconds: u64,
    },
    Completed {
        answers: HashMap<Uuid, Answer>,
        score: ScoreCard,
        reason: SubmitReason,
    },
}

/// Result of a submit call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// This call completed the run.
    Completed(ScoreCard),
    /// The run was already over; nothing changed.
    AlreadyCompleted(ScoreCard),
}

impl SubmitOutcome {
    pub fn score(&self) -> &ScoreCard {
        match self {
            SubmitOutcome::Completed(score) | SubmitOutcome::AlreadyCompleted(score) => score,
        }
    }
}

/// Result of one countdown step.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    Running { remaining_seconds: u64 },
    /// The clock hit zero and the run was submitted.
    Expired(ScoreCard),
    /// Not in progress; the timer has nothing to do.
    Idle,
}

/// One candidate's in-memory attempt at an assessment.
///
/// `NotStarted -> InProgress -> Completed`. Completed is terminal and there
/// is no pause. A manual submit needs every question to have been reached;
/// running out of time submits regardless. Nothing here is persisted;
/// dropping the session loses the answers.
#[derive(Debug, Clone)]
pub struct RunSession {
    assessment: Assessment,
    state: RunState,
}

impl RunSession {
    /// Only published assessments with at least one question can be taken.
    pub fn new(assessment: Assessment) -> Result<Self, RunnerError> {
        if !assessment.is_active() {
            return Err(RunnerError::NotActive(assessment.id));
        }
        if assessment.questions.is_empty() {
            return Err(RunnerError::NoQuestions(assessment.id));
        }
        Ok(Self {
            assessment,
            state: RunState::NotStarted,
        })
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, RunState::NotStarted)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, RunState::Completed { .. })
    }

    pub fn cursor(&self) -> Option<usize> {
        match &self.state {
            RunState::InProgress { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.cursor().and_then(|i| self.assessment.questions.get(i))
    }

    /// Questions the candidate has not navigated to yet.
    pub fn unseen_questions(&self) -> Option<usize> {
        match &self.state {
            RunState::InProgress { furthest, .. } => {
                Some(self.assessment.questions.len().saturating_sub(furthest + 1))
            }
            _ => None,
        }
    }

    pub fn remaining_seconds(&self) -> Option<u64> {
        match &self.state {
            RunState::InProgress { remaining_seconds, .. } => Some(*remaining_seconds),
            _ => None,
        }
    }

    pub fn answers(&self) -> Option<&HashMap<Uuid, Answer>> {
        match &self.state {
            RunState::InProgress { answers, .. } | RunState::Completed { answers, .. } => {
                Some(answers)
            }
            RunState::NotStarted => None,
        }
    }

    pub fn score(&self) -> Option<&ScoreCard> {
        match &self.state {
            RunState::Completed { score, .. } => Some(score),
            _ => None,
        }
    }

    /// Start the clock at the assessment's full duration.
    pub fn start(&mut self) -> Result<(), RunnerError> {
        if self.is_started() {
            return Err(RunnerError::AlreadyStarted);
        }
        self.state = RunState::InProgress {
            cursor: 0,
            furthest: 0,
            answers: HashMap::new(),
            remaining_seconds: self.assessment.duration_seconds(),
        };
        tracing::info!(
            assessment_id = %self.assessment.id,
            questions = self.assessment.questions.len(),
            duration_seconds = self.assessment.duration_seconds(),
            "assessment run started"
        );
        Ok(())
    }

    /// Advance the cursor. Stops at the last question.
    pub fn next(&mut self) -> Option<usize> {
        let last = self.assessment.questions.len().saturating_sub(1);
        match &mut self.state {
            RunState::InProgress { cursor, furthest, .. } => {
                if *cursor < last {
                    *cursor += 1;
                }
                *furthest = (*furthest).max(*cursor);
                Some(*cursor)
            }
            _ => None,
        }
    }

    /// Move the cursor back. Stops at the first question.
    pub fn previous(&mut self) -> Option<usize> {
        match &mut self.state {
            RunState::InProgress { cursor, .. } => {
                *cursor = cursor.saturating_sub(1);
                Some(*cursor)
            }
            _ => None,
        }
    }

    /// Record or overwrite the answer to one question.
    pub fn record_answer(&mut self, question_id: Uuid, answer: Answer) -> Result<(), RunnerError> {
        let RunState::InProgress { answers, .. } = &mut self.state else {
            return Err(RunnerError::NotInProgress);
        };
        let question = self
            .assessment
            .question(question_id)
            .ok_or(RunnerError::UnknownQuestion(question_id))?;
        question.check_answer(&answer)?;
        answers.insert(question_id, answer);
        Ok(())
    }

    /// Answer whatever question the cursor is on.
    pub fn answer_current(&mut self, answer: Answer) -> Result<(), RunnerError> {
        let question_id = self
            .current_question()
            .map(|q| q.id)
            .ok_or(RunnerError::NotInProgress)?;
        self.record_answer(question_id, answer)
    }

    /// Advance the clock by one second, submitting when it reaches zero.
    pub fn tick(&mut self) -> Result<Tick, RunnerError> {
        let RunState::InProgress { remaining_seconds, .. } = &mut self.state else {
            return Ok(Tick::Idle);
        };

        *remaining_seconds = remaining_seconds.saturating_sub(1);
        if *remaining_seconds > 0 {
            return Ok(Tick::Running {
                remaining_seconds: *remaining_seconds,
            });
        }

        tracing::info!(assessment_id = %self.assessment.id, "time expired, submitting");
        let score = self.complete(SubmitReason::TimedOut)?;
        Ok(Tick::Expired(score))
    }

    /// Finish the run once every question has been reached. Calling this on
    /// a completed run changes nothing.
    pub fn submit(&mut self) -> Result<SubmitOutcome, RunnerError> {
        match &self.state {
            RunState::NotStarted => Err(RunnerError::NotInProgress),
            RunState::Completed { score, .. } => {
                Ok(SubmitOutcome::AlreadyCompleted(score.clone()))
            }
            RunState::InProgress { .. } => {
                if let Some(remaining) = self.unseen_questions().filter(|n| *n > 0) {
                    return Err(RunnerError::QuestionsRemaining { remaining });
                }
                let score = self.complete(SubmitReason::Manual)?;
                Ok(SubmitOutcome::Completed(score))
            }
        }
    }

    /// Score the current answers and move to Completed. Leaves the state
    /// untouched if scoring fails.
    fn complete(&mut self, reason: SubmitReason) -> Result<ScoreCard, RunnerError> {
        let score = match &self.state {
            RunState::InProgress { answers, .. } => scoring::score(&self.assessment, answers)?,
            _ => return Err(RunnerError::NotInProgress),
        };

        if let RunState::InProgress { answers, .. } = &mut self.state {
            let answers = std::mem::take(answers);
            self.state = RunState::Completed {
                answers,
                score: score.clone(),
                reason,
            };
        }

        tracing::info!(
            assessment_id = %self.assessment.id,
            percent = score.percent,
            passed = score.passed,
            ?reason,
            "assessment run completed"
        );
        Ok(score)
    }
}
