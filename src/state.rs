//! Снимок состояния раздачи для внешнего кода (UI, API, логи).
//!
//! Снимок - копия: изменить через него движок нельзя.
//! Колода в снимок не попадает, чтобы не раскрывать будущие карты.

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::Player;
use crate::domain::{HandId, SeatIndex};
use crate::engine::hand_history::ActionRecord;
use crate::engine::showdown::HandResult;
use crate::engine::{HandEngine, RandomSource};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSnapshot {
    pub hand_id: Option<HandId>,
    pub players: Vec<Player>,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub street: Street,
    pub current_player_index: SeatIndex,
    pub dealer_index: SeatIndex,
    pub small_blind_index: SeatIndex,
    pub big_blind_index: SeatIndex,
    pub min_bet: Chips,
    pub last_raise_amount: Chips,
    pub total_chips: Chips,
    pub actions: Vec<ActionRecord>,
    pub result: Option<HandResult>,
}

impl HandSnapshot {
    pub fn from_engine<R: RandomSource>(engine: &HandEngine<R>) -> Self {
        Self {
            hand_id: engine.hand_id(),
            players: engine.players().to_vec(),
            board: engine.board().to_vec(),
            pot: engine.pot(),
            street: engine.street(),
            current_player_index: engine.current_player_index(),
            dealer_index: engine.dealer_index(),
            small_blind_index: engine.small_blind_index(),
            big_blind_index: engine.big_blind_index(),
            min_bet: engine.min_bet(),
            last_raise_amount: engine.last_raise_amount(),
            total_chips: engine.total_chips(),
            actions: engine.action_log().records().to_vec(),
            result: engine.hand_result().cloned(),
        }
    }

    /// Игрок, чей сейчас ход (None до старта и после шоудауна).
    pub fn player_to_act(&self) -> Option<&Player> {
        if self.hand_id.is_none() || self.street == Street::Showdown {
            return None;
        }
        self.players
            .get(self.current_player_index)
            .filter(|p| p.can_act())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
