//! Доменная модель: карты, колода, фишки, игроки, улицы, конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Идентификатор раздачи (UUID v4, уникален между столами).
pub type HandId = uuid::Uuid;

/// Индекс места в списке игроков раздачи.
pub type SeatIndex = usize;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
