use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::SeatIndex;
use crate::engine::actions::ActionType;

/// Запись лога действий. После создания не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRecord {
    /// Имя игрока.
    pub actor: String,
    pub seat: SeatIndex,
    pub kind: ActionType,
    /// Сколько фишек реально ушло в банк этим действием.
    pub amount: Chips,
    pub street: Street,
}

/// Лог действий раздачи: только дописывание в конец.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&ActionRecord> {
        self.records.last()
    }

    pub fn on_street(&self, street: Street) -> impl Iterator<Item = &ActionRecord> {
        self.records.iter().filter(move |r| r.street == street)
    }

    /// Сумма фишек, прошедших через лог (блайнды + ставки).
    pub fn total_committed(&self) -> Chips {
        self.records.iter().map(|r| r.amount).sum()
    }
}
