use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Общий банк раздачи. До выплаты только растёт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Забрать весь банк на выплату; банк становится пустым.
    pub fn take_all(&mut self) -> Chips {
        std::mem::take(&mut self.total)
    }
}
