use talentflow_core::error::CoreError;
use talentflow_core::models::answer::Answer;
use talentflow_core::models::assessment::AssessmentCategory;
use talentflow_core::models::question::{Question, QuestionKind, QuestionType};
use uuid::Uuid;

fn multiple_choice(options: &[&str], correct: Option<usize>) -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: "Which keyword declares an immutable binding?".to_string(),
        kind: QuestionKind::MultipleChoice {
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer_index: correct,
        },
        points: 10,
        time_limit_seconds: Some(120),
    }
}

fn rating() -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: "Rate your Rust experience".to_string(),
        kind: QuestionKind::Rating,
        points: 5,
        time_limit_seconds: None,
    }
}

#[test]
fn multiple_choice_without_correct_index_is_incomplete() {
    assert!(!multiple_choice(&["let", "mut"], None).is_complete());
}

#[test]
fn multiple_choice_with_blank_option_is_incomplete() {
    assert!(!multiple_choice(&["let", "  "], Some(0)).is_complete());
}

#[test]
fn multiple_choice_with_out_of_range_index_is_incomplete() {
    assert!(!multiple_choice(&["let", "mut"], Some(2)).is_complete());
}

#[test]
fn complete_multiple_choice() {
    assert!(multiple_choice(&["let", "mut"], Some(0)).is_complete());
}

#[test]
fn non_choice_questions_are_always_complete() {
    assert!(rating().is_complete());
}

#[test]
fn answer_of_wrong_shape_is_rejected() {
    let q = multiple_choice(&["let", "mut"], Some(0));
    let err = q.check_answer(&Answer::Text("let".to_string())).unwrap_err();
    assert!(matches!(
        err,
        CoreError::AnswerTypeMismatch {
            expected: QuestionType::MultipleChoice,
            actual: QuestionType::Text,
        }
    ));
}

#[test]
fn choice_index_must_exist() {
    let q = multiple_choice(&["let", "mut"], Some(0));
    assert!(matches!(
        q.check_answer(&Answer::Choice(5)),
        Err(CoreError::OptionOutOfRange { index: 5, options: 2 })
    ));
    assert!(q.check_answer(&Answer::Choice(1)).is_ok());
}

#[test]
fn rating_must_be_one_through_five() {
    let q = rating();
    assert!(matches!(
        q.check_answer(&Answer::Rating(0)),
        Err(CoreError::RatingOutOfRange(0))
    ));
    assert!(matches!(
        q.check_answer(&Answer::Rating(6)),
        Err(CoreError::RatingOutOfRange(6))
    ));
    assert!(q.check_answer(&Answer::Rating(5)).is_ok());
}

#[test]
fn question_serializes_with_type_tag() {
    let q = multiple_choice(&["let", "mut"], Some(1));
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json["type"], "multiple-choice");
    assert_eq!(json["correct_answer_index"], 1);
    assert_eq!(json["options"][1], "mut");

    let back: Question = serde_json::from_value(json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn question_type_parses_from_wire_name() {
    assert_eq!(
        "multiple-choice".parse::<QuestionType>().unwrap(),
        QuestionType::MultipleChoice
    );
    assert!("essay".parse::<QuestionType>().is_err());
}

#[test]
fn whitespace_text_answer_is_blank() {
    assert!(Answer::Text("   ".to_string()).is_blank());
    assert!(!Answer::Text("ok".to_string()).is_blank());
    assert!(!Answer::Rating(3).is_blank());
}

#[test]
fn assessment_category_parses_from_wire_name() {
    assert_eq!(
        "personality".parse::<AssessmentCategory>().unwrap(),
        AssessmentCategory::Personality
    );
    assert!(matches!(
        "trivia".parse::<AssessmentCategory>(),
        Err(CoreError::UnknownVariant { kind: "assessment category", .. })
    ));
}
