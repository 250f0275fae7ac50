use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::PlayerStatus;
use crate::domain::{HandId, SeatIndex};
use crate::engine::actions::ActionType;
use crate::engine::showdown::{Payout, WinReason};

/// Игрок в сохранённой раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRecord {
    pub seat: SeatIndex,
    pub name: String,
    pub starting_stack: Chips,
    pub final_stack: Chips,
    /// Ставка на последней улице к моменту записи (после выплаты 0).
    #[serde(default)]
    pub current_bet: Chips,
    /// Карты в текстовом виде ("Ah", "Td").
    pub hole_cards: Vec<String>,
    pub status: PlayerStatus,
}

/// Кто и почему забрал банк.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerInfo {
    pub reason: WinReason,
    pub payouts: Vec<Payout>,
    /// Описание выигравшей руки; None без вскрытия.
    pub hand_description: Option<String>,
}

/// Одно действие в сохранённой раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionEntry {
    /// Порядковый номер в раздаче, с нуля.
    pub sequence: usize,
    pub player_name: String,
    pub seat: SeatIndex,
    pub action: ActionType,
    pub amount: Chips,
    pub street: Street,
}

/// Завершённая раздача в хранилище.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRecord {
    pub hand_id: HandId,
    pub players: Vec<PlayerRecord>,
    pub community_cards: Vec<String>,
    pub pot_amount: Chips,
    pub winner: WinnerInfo,
    pub actions: Vec<ActionEntry>,
    /// Порядок сохранения; выставляет хранилище.
    #[serde(default)]
    pub created_at_seq: u64,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("раздача {0} не найдена")]
    NotFound(HandId),

    #[error("раздача ещё не завершена")]
    HandNotFinished,

    #[error("ошибка сериализации: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Абстракция хранилища истории раздач.
///
/// Движок ничего не знает о хранилище: запись формирует `infra::mapping`,
/// сохраняет её `api::TableService` после шоудауна.
pub trait HandStore {
    /// Сохранить раздачу. Повторное сохранение того же `hand_id` ничего не делает
    /// и возвращает `false`.
    fn save_hand(&mut self, record: HandRecord) -> Result<bool, StoreError>;

    fn load_hand(&self, hand_id: HandId) -> Result<Option<HandRecord>, StoreError>;

    /// Последние `limit` раздач, новые первыми.
    fn recent_hands(&self, limit: usize) -> Result<Vec<HandRecord>, StoreError>;

    /// Действия раздачи в порядке совершения.
    fn hand_actions(&self, hand_id: HandId) -> Result<Vec<ActionEntry>, StoreError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryHandStore {
    hands: HashMap<HandId, HandRecord>,
    next_seq: u64,
}

#[derive(Serialize, Deserialize)]
struct StoreDump {
    hands: Vec<HandRecord>,
}

impl InMemoryHandStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Выгрузить всё в JSON (в порядке сохранения).
    pub fn to_json(&self) -> Result<String, StoreError> {
        let mut hands: Vec<HandRecord> = self.hands.values().cloned().collect();
        hands.sort_by_key(|h| h.created_at_seq);
        Ok(serde_json::to_string_pretty(&StoreDump { hands })?)
    }

    /// Восстановить хранилище из выгрузки `to_json`.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let dump: StoreDump = serde_json::from_str(json)?;
        let next_seq = dump
            .hands
            .iter()
            .map(|h| h.created_at_seq + 1)
            .max()
            .unwrap_or(0);
        let hands = dump.hands.into_iter().map(|h| (h.hand_id, h)).collect();
        Ok(Self { hands, next_seq })
    }
}

impl HandStore for InMemoryHandStore {
    fn save_hand(&mut self, mut record: HandRecord) -> Result<bool, StoreError> {
        if self.hands.contains_key(&record.hand_id) {
            log::debug!("раздача {} уже сохранена", record.hand_id);
            return Ok(false);
        }
        record.created_at_seq = self.next_seq;
        self.next_seq += 1;
        self.hands.insert(record.hand_id, record);
        Ok(true)
    }

    fn load_hand(&self, hand_id: HandId) -> Result<Option<HandRecord>, StoreError> {
        Ok(self.hands.get(&hand_id).cloned())
    }

    fn recent_hands(&self, limit: usize) -> Result<Vec<HandRecord>, StoreError> {
        let mut hands: Vec<&HandRecord> = self.hands.values().collect();
        hands.sort_by(|a, b| b.created_at_seq.cmp(&a.created_at_seq));
        Ok(hands.into_iter().take(limit).cloned().collect())
    }

    fn hand_actions(&self, hand_id: HandId) -> Result<Vec<ActionEntry>, StoreError> {
        let record = self
            .hands
            .get(&hand_id)
            .ok_or(StoreError::NotFound(hand_id))?;
        let mut actions = record.actions.clone();
        actions.sort_by_key(|a| a.sequence);
        Ok(actions)
    }
}
