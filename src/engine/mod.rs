//! Движок одной раздачи: ставки, переход улиц, шоудаун.
//!
//! Высокоуровневый объект: `HandEngine`
//! Основные операции:
//!   - `start_hand` – запустить новую раздачу
//!   - `deal_street` / `deal_flop` / `deal_turn` / `deal_river` – открыть карты борда
//!   - `apply_action` – применить действие игрока
//!   - `resolve_winner` – определить победителя и раздать банк

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod showdown;
pub mod validation;

pub use actions::{ActionType, PlayerActionKind};
pub use betting::{is_street_complete, BettingState};
pub use errors::EngineError;
pub use game_loop::HandEngine;
pub use hand_history::{ActionLog, ActionRecord};
pub use pot::Pot;
pub use showdown::{HandResult, Payout, ShowdownHand, ShowdownInput, WinReason, WinnerResolver};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (`SystemRng`, `DeterministicRng`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

impl<R: RandomSource> RandomSource for &mut R {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        (**self).shuffle(slice)
    }
}
