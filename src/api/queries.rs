use serde::{Deserialize, Serialize};

use super::dto::{ActionDto, GameStateDto, HandHistoryItemDto};

fn default_history_limit() -> usize {
    10
}

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Текущее состояние стола.
    State,

    /// Последние сыгранные раздачи, новые первыми.
    HandHistory {
        #[serde(default = "default_history_limit")]
        limit: usize,
    },

    /// Действия конкретной раздачи по порядку.
    HandActions { hand_id: String },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum QueryResponse {
    State(GameStateDto),
    HandHistory(Vec<HandHistoryItemDto>),
    HandActions(Vec<ActionDto>),
}
