use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use talentflow_core::models::answer::Answer;
use talentflow_core::models::assessment::Assessment;
use talentflow_core::models::question::{Question, QuestionKind, QuestionType};

use crate::error::ScoringError;

/// Share of a text or rating question's points awarded for any non-blank
/// answer. Completion credit, not a correctness grade.
pub const COMPLETION_CREDIT_PERCENT: u64 = 80;

/// How a single question contributed to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Credit {
    /// Multiple-choice answer matched the correct option.
    Correct,
    /// Multiple-choice answer did not match, or the answer had the wrong shape.
    Incorrect,
    /// Text or rating answer was present and non-blank.
    Completion,
    /// Integer answers are recorded but never earn points.
    NotGraded,
    Unanswered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionScore {
    pub question_id: Uuid,
    pub question_type: QuestionType,
    pub points: u32,
    /// Earned points in tenths, so 80% of 5 points is 40.
    pub earned_tenths: u64,
    pub credit: Credit,
}

/// The outcome of scoring one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreCard {
    pub assessment_id: Uuid,
    pub max_score: u32,
    pub earned_tenths: u64,
    /// `round(100 * earned / max_score)`, halves rounding up.
    pub percent: u8,
    pub passing_score_percent: u8,
    pub passed: bool,
    pub questions: Vec<QuestionScore>,
}

impl ScoreCard {
    pub fn earned_points(&self) -> f64 {
        self.earned_tenths as f64 / 10.0
    }
}

/// Score a set of answers against an assessment.
///
/// Pure and deterministic. Points are tracked in integer tenths so the
/// 80% completion credit never goes through floating point.
pub fn score(
    assessment: &Assessment,
    answers: &HashMap<Uuid, Answer>,
) -> Result<ScoreCard, ScoringError> {
    let max_score = assessment.max_score();
    if max_score == 0 {
        return Err(ScoringError::NoAchievablePoints {
            assessment_id: assessment.id,
        });
    }

    let questions: Vec<QuestionScore> = assessment
        .questions
        .iter()
        .map(|q| score_question(q, answers.get(&q.id)))
        .collect();

    let earned_tenths: u64 = questions.iter().map(|q| q.earned_tenths).sum();
    let percent = rounded_percent(earned_tenths, max_score);

    Ok(ScoreCard {
        assessment_id: assessment.id,
        max_score,
        earned_tenths,
        percent,
        passing_score_percent: assessment.passing_score_percent,
        passed: percent >= assessment.passing_score_percent,
        questions,
    })
}

fn score_question(question: &Question, answer: Option<&Answer>) -> QuestionScore {
    let full = u64::from(question.points) * 10;
    let completion = u64::from(question.points) * COMPLETION_CREDIT_PERCENT / 10;

    let (earned_tenths, credit) = match (&question.kind, answer) {
        (_, None) => (0, Credit::Unanswered),
        (
            QuestionKind::MultipleChoice {
                correct_answer_index,
                ..
            },
            Some(Answer::Choice(index)),
        ) => {
            if *correct_answer_index == Some(*index) {
                (full, Credit::Correct)
            } else {
                (0, Credit::Incorrect)
            }
        }
        (QuestionKind::Text, Some(answer @ Answer::Text(_)))
        | (QuestionKind::Rating, Some(answer @ Answer::Rating(_))) => {
            if answer.is_blank() {
                (0, Credit::Unanswered)
            } else {
                (completion, Credit::Completion)
            }
        }
        (QuestionKind::Integer, Some(Answer::Integer(_))) => (0, Credit::NotGraded),
        (_, Some(_)) => (0, Credit::Incorrect),
    };

    QuestionScore {
        question_id: question.id,
        question_type: question.question_type(),
        points: question.points,
        earned_tenths,
        credit,
    }
}

/// Round-half-up of `100 * earned_tenths / (10 * max_score)`.
fn rounded_percent(earned_tenths: u64, max_score: u32) -> u8 {
    let numerator = 100 * earned_tenths;
    let denominator = 10 * u64::from(max_score);
    let percent = (2 * numerator + denominator) / (2 * denominator);
    // earned never exceeds max, so this is at most 100
    percent.min(100) as u8
}
