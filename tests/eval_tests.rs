use holdem_hand_engine::domain::card::{parse_cards, Card};
use holdem_hand_engine::eval::{
    describe_hand, evaluate_best_hand, EvalError, HandCategory, HandEvaluator, StandardEvaluator,
};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn eval7(s: &str) -> holdem_hand_engine::eval::Evaluation {
    StandardEvaluator.evaluate7(&cards(s)).unwrap()
}

#[test]
fn categories_are_detected() {
    let table = [
        ("Ah Kd 9c 7s 4h 3d 2c", HandCategory::HighCard),
        ("Ah Ad 9c 7s 4h 3d 2c", HandCategory::OnePair),
        ("Kh Kd 5c 5s 4h 3d 2c", HandCategory::TwoPair),
        ("Qh Qd Qc 7s 4h 3d 2c", HandCategory::ThreeOfAKind),
        ("9h 8d 7c 6s 5h Kd 2c", HandCategory::Straight),
        ("Ah Jh 9h 7h 3h Kd 2c", HandCategory::Flush),
        ("Th Td Tc 4s 4h 3d 2c", HandCategory::FullHouse),
        ("8h 8d 8c 8s 4h 3d 2c", HandCategory::FourOfAKind),
        ("9h 8h 7h 6h 5h Kd 2c", HandCategory::StraightFlush),
    ];
    for (hand, expected) in table {
        assert_eq!(eval7(hand).rank.category(), expected, "{hand}");
    }
}

#[test]
fn descriptions() {
    assert_eq!(eval7("Kh Kd 5c 5s 4h 3d 2c").description, "Two pair, Kings and Fives");
    assert_eq!(eval7("Kh Kd 9c 7s 4h 3d 2c").description, "Pair of Kings");
    assert_eq!(eval7("Ah Kh Qh Jh Th 3d 2c").description, "Royal flush");
    assert_eq!(eval7("Th Td Tc 4s 4h 3d 2c").description, "Full house, Tens full of Fours");
    assert_eq!(eval7("Ah 2d 3c 4s 5h Kd 9c").description, "Straight, Five high");
}

#[test]
fn wheel_is_lowest_straight() {
    let wheel = eval7("Ah 2d 3c 4s 5h Kd 9c");
    let six_high = eval7("6h 2d 3c 4s 5h Kd 9c");
    assert!(six_high.rank > wheel.rank);
}

#[test]
fn kickers_break_ties() {
    let ak = eval7("Ah Ad Kc 7s 4h 3d 2c");
    let aq = eval7("Ah Ad Qc 7s 4h 3d 2c");
    assert!(ak.rank > aq.rank);

    // ранг зависит только от лучших 5 карт
    let same_a = eval7("Ah Ad Kc Qs Jh 3d 2c");
    let same_b = eval7("As Ac Kd Qh Jc 4d 2h");
    assert_eq!(same_a.rank, same_b.rank);
}

#[test]
fn full_house_beats_flush() {
    assert!(eval7("Th Td Tc 4s 4h 3d 2c").rank > eval7("Ah Jh 9h 7h 3h Kd 2c").rank);
}

#[test]
fn evaluate7_requires_exactly_seven_unique_cards() {
    assert_eq!(
        StandardEvaluator.evaluate7(&cards("Ah Kd 9c 7s 4h")),
        Err(EvalError::WrongCardCount(5))
    );
    let dup = cards("Ah Ah 9c 7s 4h 3d 2c");
    assert_eq!(
        StandardEvaluator.evaluate7(&dup),
        Err(EvalError::DuplicateCard(dup[0]))
    );
}

#[test]
fn best_hand_accepts_five_to_seven_cards() {
    assert!(evaluate_best_hand(&cards("Ah Kd 9c 7s 4h")).is_ok());
    assert!(evaluate_best_hand(&cards("Ah Kd 9c 7s 4h 3c")).is_ok());
    assert!(evaluate_best_hand(&cards("Ah Kd 9c 7s")).is_err());
    let rank = evaluate_best_hand(&cards("9h 8h 7h 6h 5h")).unwrap();
    assert_eq!(describe_hand(rank), "Straight flush, Nine high");
}
