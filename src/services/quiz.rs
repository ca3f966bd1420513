// src/services/quiz.rs

//! Next-question selection for a quiz round.
//!
//! A round draws from a *universe* of question ids: every question when the
//! round covers all categories, otherwise the questions of one category.
//! Ids the client has already been served must lie inside that universe;
//! the next question is drawn uniformly from whatever remains.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{
    models::{
        question::Question,
        quiz::{CategorySelector, QuizRound},
    },
    store::{QuizStore, StoreError},
    utils::random::RandomSource,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Previously served ids that are not part of the round's universe.
    #[error("invalid previous questions: {unknown:?}")]
    InvalidPreviousQuestions { unknown: Vec<i64> },
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("category {0} not found")]
    CategoryNotFound(i64),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rejects `previous` unless it is a subset of `universe`.
/// Offending ids are reported, never silently dropped.
pub fn validate_previous(
    universe: &BTreeSet<i64>,
    previous: &BTreeSet<i64>,
) -> Result<(), SelectionError> {
    let unknown: Vec<i64> = previous.difference(universe).copied().collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(SelectionError::InvalidPreviousQuestions { unknown })
    }
}

/// Ids still eligible in this round, ascending.
pub fn candidate_pool(universe: &BTreeSet<i64>, previous: &BTreeSet<i64>) -> Vec<i64> {
    universe.difference(previous).copied().collect()
}

/// Validates `previous` and draws one id uniformly from the candidate pool.
///
/// `Ok(None)` means the round is exhausted.
pub fn pick_next(
    universe: &BTreeSet<i64>,
    previous: &BTreeSet<i64>,
    random: &dyn RandomSource,
) -> Result<Option<i64>, SelectionError> {
    validate_previous(universe, previous)?;

    let pool = candidate_pool(universe, previous);
    if pool.is_empty() {
        return Ok(None);
    }

    Ok(Some(pool[random.pick_index(pool.len())]))
}

/// Resolves the round's universe from the store and returns the next question.
///
/// A category selector naming an unknown category is `CategoryNotFound`,
/// kept apart from an invalid `previous_questions` set.
pub async fn next_question(
    store: &dyn QuizStore,
    random: &dyn RandomSource,
    round: &QuizRound,
) -> Result<Option<Question>, QuizError> {
    let questions = match round.category {
        CategorySelector::All => store.list_questions().await?,
        CategorySelector::Category(id) => {
            if store.get_category(id).await?.is_none() {
                return Err(QuizError::CategoryNotFound(id));
            }
            store.questions_in_category(id).await?
        }
    };

    let universe: BTreeSet<i64> = questions.iter().map(|q| q.id).collect();
    let chosen = pick_next(&universe, &round.previous_questions, random)?;

    tracing::debug!(
        "Quiz round over {} questions, {} served, next: {:?}",
        universe.len(),
        round.previous_questions.len(),
        chosen
    );

    Ok(chosen.and_then(|id| questions.into_iter().find(|q| q.id == id)))
}
