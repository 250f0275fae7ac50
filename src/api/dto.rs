use serde::{Deserialize, Serialize};

use crate::domain::card::card_tokens;
use crate::domain::player::Player;
use crate::engine::hand_history::ActionRecord;
use crate::engine::showdown::{HandResult, Payout};
use crate::infra::persistence::{ActionEntry, HandRecord, PlayerRecord};
use crate::state::HandSnapshot;

/// DTO игрока: карты строками, флаги вместо статуса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub name: String,
    pub stack: u64,
    pub cards: Vec<String>,
    pub is_active: bool,
    pub is_all_in: bool,
    pub current_bet: u64,
}

impl From<&Player> for PlayerDto {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            stack: p.stack.0,
            cards: card_tokens(&p.hole_cards),
            is_active: p.is_active(),
            is_all_in: p.is_all_in(),
            current_bet: p.current_bet.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionDto {
    pub player_name: String,
    /// "fold", "check", "call", "bet", "raise", "all_in", "small_blind", "big_blind".
    pub action_type: String,
    pub amount: u64,
    pub street: String,
}

impl From<&ActionRecord> for ActionDto {
    fn from(r: &ActionRecord) -> Self {
        Self {
            player_name: r.actor.clone(),
            action_type: r.kind.as_str().to_string(),
            amount: r.amount.0,
            street: r.street.as_str().to_string(),
        }
    }
}

impl From<&ActionEntry> for ActionDto {
    fn from(e: &ActionEntry) -> Self {
        Self {
            player_name: e.player_name.clone(),
            action_type: e.action.as_str().to_string(),
            amount: e.amount.0,
            street: e.street.as_str().to_string(),
        }
    }
}

/// Полное состояние стола для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateDto {
    pub hand_id: Option<String>,
    pub players: Vec<PlayerDto>,
    pub community_cards: Vec<String>,
    pub pot_amount: u64,
    pub current_street: String,
    pub current_player_index: usize,
    pub dealer_index: usize,
    pub small_blind_index: usize,
    pub big_blind_index: usize,
    pub min_bet: u64,
    pub last_raise_amount: u64,
    pub actions: Vec<ActionDto>,
    /// Что может сделать игрок, чей сейчас ход.
    pub legal_actions: Vec<String>,
}

impl GameStateDto {
    pub fn from_snapshot(snapshot: &HandSnapshot, legal_actions: Vec<String>) -> Self {
        Self {
            hand_id: snapshot.hand_id.map(|id| id.to_string()),
            players: snapshot.players.iter().map(PlayerDto::from).collect(),
            community_cards: card_tokens(&snapshot.board),
            pot_amount: snapshot.pot.0,
            current_street: snapshot.street.as_str().to_string(),
            current_player_index: snapshot.current_player_index,
            dealer_index: snapshot.dealer_index,
            small_blind_index: snapshot.small_blind_index,
            big_blind_index: snapshot.big_blind_index,
            min_bet: snapshot.min_bet.0,
            last_raise_amount: snapshot.last_raise_amount.0,
            actions: snapshot.actions.iter().map(ActionDto::from).collect(),
            legal_actions,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutDto {
    pub seat: usize,
    pub name: String,
    pub amount: u64,
}

impl From<&Payout> for PayoutDto {
    fn from(p: &Payout) -> Self {
        Self {
            seat: p.seat,
            name: p.name.clone(),
            amount: p.amount.0,
        }
    }
}

/// Итог раздачи для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerDto {
    /// "uncontested" или "showdown".
    pub reason: String,
    pub winners: Vec<PayoutDto>,
    pub hand_description: Option<String>,
}

impl From<&HandResult> for WinnerDto {
    fn from(r: &HandResult) -> Self {
        Self {
            reason: r.reason.as_str().to_string(),
            winners: r.payouts.iter().map(PayoutDto::from).collect(),
            hand_description: r.winning_hand.as_ref().map(|e| e.description.clone()),
        }
    }
}

/// Игрок в истории раздач.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandPlayerDto {
    pub name: String,
    pub cards: Vec<String>,
    pub starting_stack: u64,
    pub final_stack: u64,
    pub current_bet: u64,
}

impl From<&PlayerRecord> for HandPlayerDto {
    fn from(p: &PlayerRecord) -> Self {
        Self {
            name: p.name.clone(),
            cards: p.hole_cards.clone(),
            starting_stack: p.starting_stack.0,
            final_stack: p.final_stack.0,
            current_bet: p.current_bet.0,
        }
    }
}

/// DTO одной сыгранной раздачи (для истории).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistoryItemDto {
    pub hand_id: String,
    pub players: Vec<HandPlayerDto>,
    pub community_cards: Vec<String>,
    pub pot_amount: u64,
    pub winner: WinnerDto,
}

impl From<&HandRecord> for HandHistoryItemDto {
    fn from(r: &HandRecord) -> Self {
        Self {
            hand_id: r.hand_id.to_string(),
            players: r.players.iter().map(HandPlayerDto::from).collect(),
            community_cards: r.community_cards.clone(),
            pot_amount: r.pot_amount.0,
            winner: WinnerDto {
                reason: r.winner.reason.as_str().to_string(),
                winners: r.winner.payouts.iter().map(PayoutDto::from).collect(),
                hand_description: r.winner.hand_description.clone(),
            },
        }
    }
}
