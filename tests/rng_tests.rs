//! RNG tests
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - что SystemRng даёт перестановку, а не что-то другое
//! - работу Deck + shuffle + RandomSource

use std::collections::HashSet;

use holdem_hand_engine::domain::deck::Deck;
use holdem_hand_engine::engine::RandomSource;
use holdem_hand_engine::infra::{DeterministicRng, SystemRng, UnshuffledRng};

fn drain(mut deck: Deck) -> Vec<String> {
    let mut out = Vec::new();
    while let Ok(card) = deck.draw() {
        out.push(card.to_string());
    }
    out
}

//
// TEST 1 - DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();
    r1.shuffle(&mut a);
    r2.shuffle(&mut b);
    assert_eq!(a, b);
}

//
// TEST 2 - разные seed дают разные колоды
//
#[test]
fn different_seeds_give_different_decks() {
    let a = drain(Deck::shuffled(&mut DeterministicRng::from_seed(1)));
    let b = drain(Deck::shuffled(&mut DeterministicRng::from_seed(2)));
    assert_ne!(a, b);
}

//
// TEST 3 - последовательные перетасовки одного RNG различаются
//
#[test]
fn consecutive_shuffles_differ() {
    let mut rng = DeterministicRng::from_seed(5);
    let a = drain(Deck::shuffled(&mut rng));
    let b = drain(Deck::shuffled(&mut rng));
    assert_ne!(a, b);
}

//
// TEST 4 - SystemRng: перестановка без потерь и повторов
//
#[test]
fn system_rng_produces_permutation() {
    let cards = drain(Deck::shuffled(&mut SystemRng));
    assert_eq!(cards.len(), 52);
    let unique: HashSet<_> = cards.iter().collect();
    assert_eq!(unique.len(), 52);
}

//
// TEST 5 - UnshuffledRng оставляет стандартный порядок
//
#[test]
fn unshuffled_rng_keeps_standard_order() {
    assert_eq!(
        drain(Deck::shuffled(&mut UnshuffledRng)),
        drain(Deck::standard_52())
    );
}

//
// TEST 6 - &mut R тоже RandomSource
//
#[test]
fn mutable_reference_is_random_source() {
    let mut inner = DeterministicRng::from_seed(77);
    let mut by_ref = &mut inner;
    let a = drain(Deck::shuffled(&mut by_ref));
    let b = drain(Deck::shuffled(&mut DeterministicRng::from_seed(77)));
    assert_eq!(a, b);
}
