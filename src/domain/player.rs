use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Статус игрока в текущей раздаче.
///
/// All-in - отдельный статус: такой игрок больше не ходит, но остаётся
/// в борьбе за банк до конца раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок в раздаче и может делать ставки.
    Active,
    /// Игрок поставил весь стек.
    AllIn,
    /// Игрок сфолдил и больше не участвует в банке.
    Folded,
}

/// Игрок за столом в рамках одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Текущий стек (без того, что уже в банке).
    pub stack: Chips,
    /// Карманные карты: 0 до раздачи, 2 после.
    pub hole_cards: Vec<Card>,
    pub status: PlayerStatus,
    /// Ставка на текущей улице. Эти фишки уже лежат в банке.
    pub current_bet: Chips,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            hole_cards: Vec::new(),
            status: PlayerStatus::Active,
            current_bet: Chips::ZERO,
        }
    }

    /// Ещё претендует на банк (Active или AllIn).
    pub fn is_active(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }

    /// Может сделать ход: в раздаче и не в оллыне.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Сброс перед новой раздачей. Игрок с нулевым стеком сразу считается all-in.
    pub fn reset_for_hand(&mut self) {
        self.hole_cards.clear();
        self.current_bet = Chips::ZERO;
        self.status = if self.stack.is_zero() {
            PlayerStatus::AllIn
        } else {
            PlayerStatus::Active
        };
    }

    /// Перенести `amount` из стека в ставку улицы.
    /// Вызывающий обязан заранее проверить, что фишек хватает.
    /// Опустевший стек переводит игрока в all-in.
    pub(crate) fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.current_bet += paid;
        if self.stack.is_zero() && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        paid
    }
}
