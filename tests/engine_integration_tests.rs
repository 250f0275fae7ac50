// tests/engine_integration_tests.rs
//
// Интеграционные сценарии: несколько раздач подряд на одном движке.
//
//  1) Стеки переносятся между раздачами, фишки не теряются, кнопка ходит по кругу.
//  2) Одинаковый seed даёт одинаковую серию раздач.
//  3) Снимок состояния переживает JSON туда и обратно.
//  4) Лог раздачи полный и согласован с банком.

use holdem_hand_engine::domain::{chips::Chips, hand::Street, player::Player, table::TableConfig};
use holdem_hand_engine::engine::{
    actions::{ActionType, PlayerActionKind},
    HandEngine, RandomSource,
};
use holdem_hand_engine::eval::StandardEvaluator;
use holdem_hand_engine::infra::{DeterministicRng, UnshuffledRng};
use holdem_hand_engine::state::HandSnapshot;

// ---------------------------------------------------
// ВСПОМОГАТЕЛЬНОЕ
// ---------------------------------------------------

fn seat_players(stacks: &[u64]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(format!("P{i}"), Chips(s)))
        .collect()
}

/// Пассивный игрок: check, иначе call, иначе all-in.
fn passive_action<R: RandomSource>(engine: &HandEngine<R>, seat: usize) -> PlayerActionKind {
    let legal = engine.legal_actions(seat);
    if legal.contains(&ActionType::Check) {
        PlayerActionKind::Check
    } else if legal.contains(&ActionType::Call) {
        PlayerActionKind::Call
    } else {
        PlayerActionKind::AllIn
    }
}

/// Доиграть раздачу до шоудауна, каждый способный ходить
/// действует минимум раз на каждой улице.
fn play_passively<R: RandomSource>(engine: &mut HandEngine<R>) {
    loop {
        let mut pending = engine.players().iter().filter(|p| p.can_act()).count();
        while !(engine.is_street_complete() && pending == 0) {
            let seat = engine.current_player_index();
            if engine.legal_actions(seat).is_empty() {
                break;
            }
            let action = passive_action(engine, seat);
            engine.apply_action(seat, action).unwrap();
            pending = pending.saturating_sub(1);
        }
        match engine.street().next() {
            Some(next) if next != Street::Showdown => {
                engine.deal_street(next).unwrap();
            }
            _ => break,
        }
    }
    engine.resolve_winner(&StandardEvaluator).unwrap();
}

/// Следующая раздача с теми же игроками и их текущими стеками.
fn carry_over(engine: &HandEngine<impl RandomSource>) -> Vec<Player> {
    engine
        .players()
        .iter()
        .map(|p| Player::new(p.name.clone(), p.stack))
        .collect()
}

//
// TEST 1 - серия раздач
//
#[test]
fn stacks_carry_over_between_hands() {
    let mut engine = HandEngine::new(TableConfig::default(), DeterministicRng::from_seed(9)).unwrap();
    let mut players = seat_players(&[1000, 1000, 1000]);
    let mut dealers = Vec::new();
    let mut ids = Vec::new();

    for _ in 0..6 {
        let id = engine.start_hand(players).unwrap();
        ids.push(id);
        dealers.push(engine.dealer_index());
        assert_eq!(engine.total_chips(), Chips(3000));

        play_passively(&mut engine);
        assert!(engine.is_finished());
        assert_eq!(engine.pot(), Chips::ZERO);
        let stacks: Chips = engine.players().iter().map(|p| p.stack).sum();
        assert_eq!(stacks, Chips(3000));

        let result = engine.hand_result().unwrap();
        assert_eq!(result.total_paid(), result.total_pot);
        players = carry_over(&engine);
    }

    assert_eq!(dealers, vec![1, 2, 0, 1, 2, 0]);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

//
// TEST 2 - воспроизводимость
//
#[test]
fn same_seed_same_session() {
    fn session(seed: u64) -> Vec<(Vec<String>, Vec<u64>)> {
        let mut engine = HandEngine::new(TableConfig::default(), DeterministicRng::from_seed(seed)).unwrap();
        let mut players = seat_players(&[500, 800, 1200, 1000]);
        let mut out = Vec::new();
        for _ in 0..4 {
            engine.start_hand(players).unwrap();
            play_passively(&mut engine);
            let board = engine.board().iter().map(|c| c.to_string()).collect();
            let stacks = engine.players().iter().map(|p| p.stack.0).collect();
            out.push((board, stacks));
            players = carry_over(&engine);
        }
        out
    }

    assert_eq!(session(2024), session(2024));
    assert_ne!(session(1), session(2));
}

//
// TEST 3 - снимок и JSON
//
#[test]
fn snapshot_survives_json() {
    let mut engine = HandEngine::new(TableConfig::default(), UnshuffledRng).unwrap();
    let before = engine.current_state();
    assert!(before.hand_id.is_none());
    assert!(before.player_to_act().is_none());

    engine.start_hand(seat_players(&[1000, 1000, 1000])).unwrap();
    engine.apply_action(1, PlayerActionKind::Raise(Chips(120))).unwrap();

    let snapshot = engine.current_state();
    assert_eq!(snapshot.player_to_act().map(|p| p.name.as_str()), Some("P2"));
    assert_eq!(snapshot.min_bet, Chips(120));
    assert_eq!(snapshot.last_raise_amount, Chips(120));

    let json = snapshot.to_json().unwrap();
    let restored: HandSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);

    // в снимке нет колоды
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("deck").is_none());
    assert_eq!(value["street"], "preflop");
}

//
// TEST 4 - лог раздачи
//
#[test]
fn action_log_accounts_for_the_pot() {
    let mut engine = HandEngine::new(TableConfig::default(), UnshuffledRng).unwrap();
    engine.start_hand(seat_players(&[1000, 1000, 1000])).unwrap();

    engine.apply_action(1, PlayerActionKind::Raise(Chips(120))).unwrap();
    engine.apply_action(2, PlayerActionKind::Call).unwrap();
    engine.apply_action(0, PlayerActionKind::Fold).unwrap();
    assert!(engine.is_street_complete());

    engine.deal_flop().unwrap();
    engine.apply_action(2, PlayerActionKind::Check).unwrap();
    engine.apply_action(1, PlayerActionKind::Bet(Chips(200))).unwrap();
    engine.apply_action(2, PlayerActionKind::Call).unwrap();

    let pot_before = engine.pot();
    let logged: Chips = engine.action_log().records().iter().map(|r| r.amount).sum();
    assert_eq!(logged, pot_before);
    assert_eq!(pot_before, Chips(20 + 40 + 120 + 100 + 200 * 2));

    let streets: Vec<Street> = engine.action_log().records().iter().map(|r| r.street).collect();
    assert_eq!(
        streets,
        vec![
            Street::Preflop,
            Street::Preflop,
            Street::Preflop,
            Street::Preflop,
            Street::Preflop,
            Street::Flop,
            Street::Flop,
            Street::Flop,
        ]
    );

    engine.deal_turn().unwrap();
    engine.deal_river().unwrap();
    let result = engine.resolve_winner(&StandardEvaluator).unwrap();
    assert_eq!(result.total_pot, pot_before);
    assert_eq!(result.board.len(), 5);
    // лог после шоудауна не растёт
    assert_eq!(engine.action_log().len(), 8);
}
