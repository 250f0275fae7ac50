use thiserror::Error;

use crate::domain::hand::Street;
use crate::domain::table::ConfigError;
use crate::domain::SeatIndex;
use crate::eval::EvalError;

/// Ошибки движка раздачи.
///
/// Все отказы локальные: если метод вернул ошибку, банк, стеки и указатель хода
/// остались ровно такими, какими были до вызова.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Попытка вытянуть карту из пустой колоды. В корректной раздаче невозможно.
    #[error("Колода пуста")]
    EmptyDeck,

    #[error("Сейчас ход места {expected}, а не {got}")]
    InvalidTurn { expected: SeatIndex, got: SeatIndex },

    #[error("Недопустимое действие: {0}")]
    IllegalAction(String),

    #[error("Нельзя перейти с улицы {from} на {to}")]
    IllegalStreetTransition { from: Street, to: Street },

    #[error("Оракул не смог оценить руку: {0}")]
    EvaluationFailure(#[from] EvalError),

    #[error("Для раздачи нужно от {min} до {max} игроков, получено {got}")]
    InvalidPlayerCount { got: usize, min: usize, max: usize },

    #[error("Место {0} не существует")]
    InvalidSeat(SeatIndex),

    #[error("Раздача не начата")]
    NoActiveHand,

    #[error("Некорректный конфиг стола: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        EngineError::IllegalAction(reason.into())
    }
}
