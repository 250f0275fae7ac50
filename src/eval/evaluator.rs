use std::collections::HashSet;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::{describe_hand, HandCategory};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};
use super::{EvalError, Evaluation, HandEvaluator};

/// Встроенный оракул: точный перебор всех 5-карточных комбинаций из 7 карт.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate7(&self, cards: &[Card]) -> Result<Evaluation, EvalError> {
        if cards.len() != 7 {
            return Err(EvalError::WrongCardCount(cards.len()));
        }
        let rank = evaluate_best_hand(cards)?;
        Ok(Evaluation {
            rank,
            description: describe_hand(rank),
        })
    }
}

/// Лучшая 5-карточная рука из 5–7 карт.
pub fn evaluate_best_hand(cards: &[Card]) -> Result<HandRank, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::WrongCardCount(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(*dup));
    }

    let n = cards.len();
    let mut best = HandRank(0);
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate_5card_hand(&five));
                    }
                }
            }
        }
    }
    Ok(best)
}

/// Оценка строго 5-карточной комбинации.
fn evaluate_5card_hand(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 15];
    let mut rank_mask: RankMask = 0;
    for card in cards {
        rank_counts[usize::from(card.rank.value())] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    // (количество, ранг): сначала по количеству, затем по рангу, всё по убыванию.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .filter_map(|&r| {
            let count = rank_counts[usize::from(r.value())];
            (count > 0).then_some((count, r))
        })
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if groups.len() == 5 {
        detect_straight(rank_mask)
    } else {
        None
    };

    if let Some(high) = straight_high {
        let category = if is_flush {
            HandCategory::StraightFlush
        } else {
            HandCategory::Straight
        };
        return HandRank::from_category_and_ranks(category, &[high]);
    }

    let pattern: Vec<u8> = groups.iter().map(|(count, _)| *count).collect();
    let category = match pattern.as_slice() {
        [4, ..] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        [3, ..] => HandCategory::ThreeOfAKind,
        [2, 2, ..] => HandCategory::TwoPair,
        [2, ..] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    let ranks: Vec<Rank> = groups.iter().map(|(_, r)| *r).collect();
    HandRank::from_category_and_ranks(category, &ranks)
}
