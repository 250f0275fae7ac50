use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl HandRank {
    /// Собрать HandRank из категории и рангов, значимых для сравнения
    /// (от старшего к младшему; недостающие позиции = 0).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Rank: 2..14 влезает в 4 бита, 0 = "нет карты".
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut value = (category as u32) << 20;
        for (slot, rank) in ranks.iter().take(5).enumerate() {
            value |= u32::from(rank.value()) << (16 - 4 * slot);
        }
        HandRank(value)
    }

    pub fn category(&self) -> HandCategory {
        let idx = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(idx)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Значимые ранги (от старшего к младшему), без пустых позиций.
    pub fn ranks(&self) -> Vec<Rank> {
        (0..5)
            .filter_map(|slot| {
                let nibble = ((self.0 >> (16 - 4 * slot)) & 0x0F) as u8;
                Rank::from_value(nibble)
            })
            .collect()
    }
}

/// Человеческое описание руки: "Two pair, Kings and Fives".
pub fn describe_hand(rank: HandRank) -> String {
    let cat = rank.category();
    let ranks = rank.ranks();
    let first = ranks.first().copied();
    let second = ranks.get(1).copied();

    match (cat, first, second) {
        (HandCategory::HighCard, Some(r), _) => format!("High card, {}", r.name()),
        (HandCategory::OnePair, Some(r), _) => format!("Pair of {}", r.plural_name()),
        (HandCategory::TwoPair, Some(hi), Some(lo)) => {
            format!("Two pair, {} and {}", hi.plural_name(), lo.plural_name())
        }
        (HandCategory::ThreeOfAKind, Some(r), _) => {
            format!("Three of a kind, {}", r.plural_name())
        }
        (HandCategory::Straight, Some(r), _) => format!("Straight, {} high", r.name()),
        (HandCategory::Flush, Some(r), _) => format!("Flush, {} high", r.name()),
        (HandCategory::FullHouse, Some(t), Some(p)) => {
            format!("Full house, {} full of {}", t.plural_name(), p.plural_name())
        }
        (HandCategory::FourOfAKind, Some(r), _) => format!("Four of a kind, {}", r.plural_name()),
        (HandCategory::StraightFlush, Some(Rank::Ace), _) => "Royal flush".to_string(),
        (HandCategory::StraightFlush, Some(r), _) => {
            format!("Straight flush, {} high", r.name())
        }
        (cat, _, _) => cat.name().to_string(),
    }
}
