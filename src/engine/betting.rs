use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;

/// Состояние раунда ставок на текущей улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Минимальный размер bet (на новой улице = BB, дальше = последняя ставка).
    pub min_bet: Chips,
    /// Размер последнего bet/raise на улице (0, пока агрессии не было).
    pub last_raise_amount: Chips,
}

impl BettingState {
    pub fn new(min_bet: Chips) -> Self {
        Self {
            min_bet,
            last_raise_amount: Chips::ZERO,
        }
    }

    /// Новая улица: min_bet = BB, агрессии ещё не было.
    pub fn reset_for_street(&mut self, big_blind: Chips) {
        self.min_bet = big_blind;
        self.last_raise_amount = Chips::ZERO;
    }

    /// После bet/raise размером `amount`.
    pub fn on_aggression(&mut self, amount: Chips) {
        self.min_bet = amount;
        self.last_raise_amount = amount;
    }
}

/// Максимальная ставка улицы среди игроков, ещё претендующих на банк.
pub fn max_current_bet(players: &[Player]) -> Chips {
    players
        .iter()
        .filter(|p| p.is_active())
        .map(|p| p.current_bet)
        .max()
        .unwrap_or(Chips::ZERO)
}

/// Сколько игроку нужно доставить, чтобы уравнять.
pub fn amount_to_call(players: &[Player], player: &Player) -> Chips {
    max_current_bet(players).saturating_sub(player.current_bet)
}

pub fn active_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_active()).count()
}

/// Улица закрыта: в раздаче ≤1 игрока, либо каждый, кто ещё может ходить,
/// уравнял максимальную ставку.
pub fn is_street_complete(players: &[Player]) -> bool {
    if active_count(players) <= 1 {
        return true;
    }
    let max_bet = max_current_bet(players);
    players
        .iter()
        .filter(|p| p.can_act())
        .all(|p| p.current_bet == max_bet)
}
