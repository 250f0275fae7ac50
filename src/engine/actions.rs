use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;
use crate::engine::errors::EngineError;

/// Тип записи в логе действий. Строковый вид совпадает с тем,
/// что принимают и отдают внешние коллабораторы ("fold", "all_in", ...).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Принудительные ставки: пишет сам движок, игрок их не выбирает.
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::SmallBlind => "small_blind",
            ActionType::BigBlind => "big_blind",
            ActionType::Fold => "fold",
            ActionType::Check => "check",
            ActionType::Call => "call",
            ActionType::Bet => "bet",
            ActionType::Raise => "raise",
            ActionType::AllIn => "all_in",
        }
    }

    pub fn is_forced(self) -> bool {
        matches!(self, ActionType::SmallBlind | ActionType::BigBlind)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small_blind" => Ok(ActionType::SmallBlind),
            "big_blind" => Ok(ActionType::BigBlind),
            "fold" => Ok(ActionType::Fold),
            "check" => Ok(ActionType::Check),
            "call" => Ok(ActionType::Call),
            "bet" => Ok(ActionType::Bet),
            "raise" => Ok(ActionType::Raise),
            "all_in" | "allin" | "all-in" => Ok(ActionType::AllIn),
            other => Err(EngineError::illegal(format!("неизвестное действие {other:?}"))),
        }
    }
}

/// Действие, которое выбирает игрок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Первая ставка на улице.
    Bet(Chips),
    /// Повышение: сколько фишек игрок добавляет этим действием.
    Raise(Chips),
    /// Весь оставшийся стек.
    AllIn,
}

impl PlayerActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            PlayerActionKind::Fold => ActionType::Fold,
            PlayerActionKind::Check => ActionType::Check,
            PlayerActionKind::Call => ActionType::Call,
            PlayerActionKind::Bet(_) => ActionType::Bet,
            PlayerActionKind::Raise(_) => ActionType::Raise,
            PlayerActionKind::AllIn => ActionType::AllIn,
        }
    }

    /// Собрать действие из типа и суммы (сумма важна только для bet/raise).
    /// Блайнды игрок заявить не может.
    pub fn from_parts(kind: ActionType, amount: Chips) -> Result<Self, EngineError> {
        match kind {
            ActionType::Fold => Ok(PlayerActionKind::Fold),
            ActionType::Check => Ok(PlayerActionKind::Check),
            ActionType::Call => Ok(PlayerActionKind::Call),
            ActionType::Bet => Ok(PlayerActionKind::Bet(amount)),
            ActionType::Raise => Ok(PlayerActionKind::Raise(amount)),
            ActionType::AllIn => Ok(PlayerActionKind::AllIn),
            ActionType::SmallBlind | ActionType::BigBlind => Err(EngineError::illegal(format!(
                "{kind} ставит только движок"
            ))),
        }
    }
}
