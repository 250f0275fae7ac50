use core::fmt;

use serde::{Deserialize, Serialize};

/// Улица раздачи. Порядок вариантов = порядок прохождения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Следующая улица (Showdown - конечная).
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => Some(Street::Showdown),
            Street::Showdown => None,
        }
    }

    /// С какой улицы разрешено перейти на эту.
    pub fn predecessor(self) -> Option<Street> {
        match self {
            Street::Preflop => None,
            Street::Flop => Some(Street::Preflop),
            Street::Turn => Some(Street::Flop),
            Street::River => Some(Street::Turn),
            Street::Showdown => Some(Street::River),
        }
    }

    /// Сколько карт борда открывается при переходе на эту улицу.
    pub fn cards_to_deal(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }

    /// Сколько карт на борде должно лежать на этой улице.
    pub fn board_size(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ранг руки: чем больше, тем сильнее. Кодирование - в `eval::hand_rank`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);
