// src/validation.rs

//! Translation of raw request bodies into validated domain values.
//!
//! Everything here runs before the store is touched, so a malformed request
//! never causes a read or a write.

use std::collections::BTreeSet;

use serde_json::Value;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::{CreateCategoryRequest, NewCategory},
        question::{CreateQuestionRequest, NewQuestion},
        quiz::{QuizRequest, QuizRound},
    },
    utils::html::clean_html,
};

/// Reads an integer from a JSON value.
///
/// Accepts JSON integers and strings holding an integer (surrounding
/// whitespace allowed). Floats, booleans, null, arrays and objects are rejected.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Page number from the `page` query parameter. Absent or non-numeric means page 1.
pub fn page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// Builds the quiz round from a `POST /quizzes` body.
pub fn quiz_round(request: QuizRequest) -> Result<QuizRound, AppError> {
    let category_id = request
        .quiz_category
        .and_then(|c| c.id)
        .as_ref()
        .and_then(coerce_int)
        .ok_or_else(|| AppError::BadRequest("quiz_category.id must be an integer".to_string()))?;

    let previous_questions = request
        .previous_questions
        .ok_or_else(|| AppError::BadRequest("previous_questions is required".to_string()))?
        .iter()
        .map(|v| {
            coerce_int(v).ok_or_else(|| {
                AppError::BadRequest("previous_questions must contain integers".to_string())
            })
        })
        .collect::<Result<BTreeSet<i64>, AppError>>()?;

    Ok(QuizRound {
        category: category_id.into(),
        previous_questions,
    })
}

/// Builds a question from a `POST /questions` creation body.
///
/// All four fields are required; text fields are sanitized before their
/// length rules are checked.
pub fn new_question(request: CreateQuestionRequest) -> Result<NewQuestion, AppError> {
    let (Some(text), Some(answer), Some(difficulty), Some(category)) = (
        request.question,
        request.answer,
        request.difficulty,
        request.category,
    ) else {
        return Err(AppError::BadRequest(
            "question, answer, difficulty and category are required".to_string(),
        ));
    };

    let difficulty = coerce_int(&difficulty)
        .and_then(|d| i32::try_from(d).ok())
        .ok_or_else(|| AppError::BadRequest("difficulty must be an integer".to_string()))?;
    let category_id = coerce_int(&category)
        .ok_or_else(|| AppError::BadRequest("category must be an integer".to_string()))?;

    let question = NewQuestion {
        text: clean_html(&text),
        answer: clean_html(&answer),
        difficulty,
        category_id,
    };
    question.validate()?;

    Ok(question)
}

/// Builds a category from a `POST /categories` body.
pub fn new_category(request: CreateCategoryRequest) -> Result<NewCategory, AppError> {
    let category = NewCategory {
        name: clean_html(&request.category),
    };
    category.validate()?;

    Ok(category)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::quiz::CategorySelector;

    #[test]
    fn coerce_int_accepts_integers_and_numeric_strings() {
        assert_eq!(coerce_int(&json!(4)), Some(4));
        assert_eq!(coerce_int(&json!(" 12 ")), Some(12));
        assert_eq!(coerce_int(&json!(-3)), Some(-3));
        assert_eq!(coerce_int(&json!(1.5)), None);
        assert_eq!(coerce_int(&json!("abc")), None);
        assert_eq!(coerce_int(&json!(true)), None);
        assert_eq!(coerce_int(&Value::Null), None);
    }

    #[test]
    fn page_number_defaults_to_first_page() {
        assert_eq!(page_number(None), 1);
        assert_eq!(page_number(Some("x")), 1);
        assert_eq!(page_number(Some("3")), 3);
        assert_eq!(page_number(Some("-2")), -2);
    }

    #[test]
    fn quiz_round_with_zero_category_covers_everything() {
        let request: QuizRequest = serde_json::from_value(json!({
            "quiz_category": {"id": "0", "type": "click"},
            "previous_questions": [3, "5", 3]
        }))
        .unwrap();

        let round = quiz_round(request).unwrap();
        assert_eq!(round.category, CategorySelector::All);
        assert_eq!(round.previous_questions, BTreeSet::from([3, 5]));
    }

    #[test]
    fn quiz_round_rejects_missing_or_mistyped_fields() {
        let cases = [
            json!({"previous_questions": []}),
            json!({"quiz_category": {}, "previous_questions": []}),
            json!({"quiz_category": {"id": "art"}, "previous_questions": []}),
            json!({"quiz_category": {"id": 2}}),
            json!({"quiz_category": {"id": 2}, "previous_questions": [1, "two"]}),
        ];
        for body in cases {
            let request: QuizRequest = serde_json::from_value(body.clone()).unwrap();
            assert!(
                matches!(quiz_round(request), Err(AppError::BadRequest(_))),
                "accepted {body}"
            );
        }
    }

    #[test]
    fn new_question_coerces_and_sanitizes() {
        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "  Who painted <b>Guernica</b>?<script>alert(1)</script> ",
            "answer": "Picasso",
            "difficulty": "2",
            "category": 2
        }))
        .unwrap();

        let question = new_question(request).unwrap();
        assert_eq!(question.text, "Who painted <b>Guernica</b>?");
        assert_eq!(question.difficulty, 2);
        assert_eq!(question.category_id, 2);
    }

    #[test]
    fn new_question_requires_every_field() {
        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "difficulty": 1
        }))
        .unwrap();
        assert!(matches!(new_question(request), Err(AppError::BadRequest(_))));

        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "",
            "answer": "A",
            "difficulty": 1,
            "category": 1
        }))
        .unwrap();
        assert!(matches!(new_question(request), Err(AppError::BadRequest(_))));

        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "difficulty": 0,
            "category": 1
        }))
        .unwrap();
        assert!(matches!(new_question(request), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn new_category_trims_and_rejects_blank() {
        let ok = new_category(CreateCategoryRequest {
            category: "  Music ".to_string(),
        })
        .unwrap();
        assert_eq!(ok.name, "Music");

        let blank = new_category(CreateCategoryRequest {
            category: "   ".to_string(),
        });
        assert!(matches!(blank, Err(AppError::BadRequest(_))));

        let only_script = new_category(CreateCategoryRequest {
            category: "<script>alert(1)</script>".to_string(),
        });
        assert!(matches!(only_script, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn new_category_length_is_checked_after_escaping() {
        // 100 raw characters, 500 once escaped.
        let escaped_too_long = new_category(CreateCategoryRequest {
            category: "&".repeat(100),
        });
        assert!(matches!(escaped_too_long, Err(AppError::BadRequest(_))));

        let fits = new_category(CreateCategoryRequest {
            category: "&".repeat(20),
        })
        .unwrap();
        assert_eq!(fits.name.chars().count(), 100);

        let plain = new_category(CreateCategoryRequest {
            category: "a".repeat(100),
        });
        assert!(plain.is_ok());
    }
}
