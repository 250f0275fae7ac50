//! Движок одной раздачи No-Limit Texas Hold'em.
//!
//! Слои:
//! - `domain` - карты, колода, фишки, игроки, улицы, конфиг стола;
//! - `engine` - `HandEngine` (ставки и улицы) и `WinnerResolver` (шоудаун);
//! - `eval` - оценка рук (`HandEvaluator`, `StandardEvaluator`);
//! - `infra` - RNG, ID раздач, хранилище истории;
//! - `api` - команды/запросы/DTO и `TableService` для одного стола;
//! - `state` - сериализуемый снимок раздачи.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;

pub use domain::{Card, Chips, Deck, HandId, Player, PlayerStatus, SeatIndex, Street, TableConfig};
pub use engine::{
    ActionRecord, ActionType, EngineError, HandEngine, HandResult, PlayerActionKind, RandomSource,
    WinReason, WinnerResolver,
};
pub use eval::{Evaluation, EvalError, HandEvaluator, StandardEvaluator};
pub use state::HandSnapshot;
