use serde::{Deserialize, Serialize};

use super::dto::{ActionDto, GameStateDto, WinnerDto};

/// Игрок, которого сажают в новую раздачу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub stack: u64,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, stack: u64) -> Self {
        Self {
            name: name.into(),
            stack,
        }
    }
}

/// Команды, меняющие состояние стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Запустить новую раздачу (2–6 игроков).
    StartHand { players: Vec<NewPlayer> },

    DealFlop,
    DealTurn,
    DealRiver,

    /// Действие игрока. `action` - строка вида "fold", "raise", "all_in";
    /// `amount` обязателен для bet/raise.
    PlayerAction {
        player_index: usize,
        action: String,
        #[serde(default)]
        amount: Option<u64>,
    },

    /// Шоудаун + выплата + запись в историю.
    CompleteHand,
}

/// Ответ API на команду. Всегда несёт свежее состояние стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandResponse {
    HandStarted {
        hand_id: String,
        state: GameStateDto,
    },
    CardsDealt {
        cards: Vec<String>,
        state: GameStateDto,
    },
    ActionApplied {
        action: ActionDto,
        state: GameStateDto,
    },
    HandCompleted {
        winner: WinnerDto,
        /// false, если такая раздача уже была в истории.
        saved: bool,
        state: GameStateDto,
    },
}

impl CommandResponse {
    pub fn state(&self) -> &GameStateDto {
        match self {
            CommandResponse::HandStarted { state, .. }
            | CommandResponse::CardsDealt { state, .. }
            | CommandResponse::ActionApplied { state, .. }
            | CommandResponse::HandCompleted { state, .. } => state,
        }
    }
}
