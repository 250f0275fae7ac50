use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Колода одной раздачи.
///
/// Карты лежат приватно: наружу их можно только вытянуть через `draw*`,
/// поэтому одна и та же карта не может быть выдана дважды за жизнь колоды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    /// Свежая колода, перемешанная переданным RNG.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Взять одну карту сверху колоды.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Взять n карт сверху. Всё или ничего: если карт меньше n, колода не меняется.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if self.cards.len() < n {
            return Err(EngineError::EmptyDeck);
        }
        let split_at = self.cards.len() - n;
        let mut taken = self.cards.split_off(split_at);
        // pop() выдаёт с конца, сохраняем тот же порядок
        taken.reverse();
        Ok(taken)
    }

    /// Посмотреть, какие n карт выйдут следующими, не трогая колоду.
    pub fn peek_n(&self, n: usize) -> Result<Vec<Card>, EngineError> {
        self.clone().draw_n(n)
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
