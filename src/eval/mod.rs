//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Движок зависит только от трейта `HandEvaluator` ("оракул"):
//!   `evaluate7(7 карт) -> Evaluation { rank, description }`
//! Встроенная реализация - `StandardEvaluator`; в тестах подставляются заглушки.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::hand::HandRank;

pub use evaluator::{evaluate_best_hand, StandardEvaluator};
pub use hand_rank::{describe_hand, HandCategory};

/// Результат оценки 7 карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    /// Больше - сильнее, равенство = ничья.
    pub rank: HandRank,
    pub description: String,
}

/// Оракул не смог оценить руку.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalError {
    #[error("ожидалось 7 карт, получено {0}")]
    WrongCardCount(usize),
    #[error("карта {0} встречается дважды")]
    DuplicateCard(Card),
    #[error("оракул недоступен: {0}")]
    Unavailable(String),
}

/// Оракул ранжирования рук.
pub trait HandEvaluator {
    fn evaluate7(&self, cards: &[Card]) -> Result<Evaluation, EvalError>;
}

impl<E: HandEvaluator + ?Sized> HandEvaluator for &E {
    fn evaluate7(&self, cards: &[Card]) -> Result<Evaluation, EvalError> {
        (**self).evaluate7(cards)
    }
}
