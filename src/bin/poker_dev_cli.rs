// src/bin/poker_dev_cli.rs
//
// Использование:
//   poker_dev_cli [config.json] [seed]
// RUST_LOG=debug покажет каждый ход движка.

use std::env;
use std::fs;
use std::process::ExitCode;

use holdem_hand_engine::api::{
    ApiError, Command, CommandResponse, GameStateDto, NewPlayer, Query, QueryResponse,
    TableService,
};
use holdem_hand_engine::domain::table::TableConfig;
use holdem_hand_engine::eval::StandardEvaluator;
use holdem_hand_engine::infra::{DeterministicRng, InMemoryHandStore};

type DevService = TableService<DeterministicRng, StandardEvaluator, InMemoryHandStore>;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("poker_dev_cli: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => TableConfig::from_json(&fs::read_to_string(path)?)?,
        _ => TableConfig::default(),
    };
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 42,
    };

    println!(
        "poker_dev_cli: блайнды {}/{}, seed {seed}",
        config.small_blind(),
        config.big_blind()
    );

    let mut service: DevService = TableService::new(
        config,
        DeterministicRng::from_seed(seed),
        StandardEvaluator,
        InMemoryHandStore::new(),
    )?;

    let players = ["Alice", "Bob", "Carol"]
        .iter()
        .map(|name| NewPlayer::new(*name, 1_000))
        .collect();
    let started = service.execute(Command::StartHand { players })?;
    print_state("PREFLOP", started.state());

    play_street(&mut service)?;
    for deal in [Command::DealFlop, Command::DealTurn, Command::DealRiver] {
        let dealt = service.execute(deal)?;
        if let CommandResponse::CardsDealt { cards, state } = &dealt {
            let title = format!("{} [{}]", state.current_street.to_uppercase(), cards.join(" "));
            print_state(&title, state);
        }
        play_street(&mut service)?;
    }

    let completed = service.execute(Command::CompleteHand)?;
    if let CommandResponse::HandCompleted { winner, state, .. } = &completed {
        println!();
        println!("================ SHOWDOWN ================");
        for w in &winner.winners {
            println!("  {} (seat {}) +{}", w.name, w.seat, w.amount);
        }
        println!(
            "  причина: {} {}",
            winner.reason,
            winner.hand_description.as_deref().unwrap_or("")
        );
        print_state("FINAL", state);
    }

    if let QueryResponse::HandHistory(hands) = service.query(Query::HandHistory { limit: 1 })? {
        for hand in hands {
            println!(
                "история: {} банк {} борд {}",
                hand.hand_id,
                hand.pot_amount,
                hand.community_cards.join(" ")
            );
        }
    }
    Ok(())
}

/// Пассивная стратегия: check, если можно, иначе call, иначе fold.
/// Каждый, кто может ходить, ходит на улице хотя бы раз.
fn play_street(service: &mut DevService) -> Result<(), ApiError> {
    let mut pending = service.engine().players().iter().filter(|p| p.can_act()).count();
    while pending > 0 || !service.engine().is_street_complete() {
        if service.engine().legal_actions(service.engine().current_player_index()).is_empty() {
            break;
        }
        pending = pending.saturating_sub(1);
        let seat = service.engine().current_player_index();
        let legal = service.engine().legal_actions(seat);
        let action = ["check", "call", "fold"]
            .into_iter()
            .find(|a| legal.iter().any(|l| l.as_str() == *a))
            .unwrap_or("fold");
        let applied = service.execute(Command::PlayerAction {
            player_index: seat,
            action: action.to_string(),
            amount: None,
        })?;
        if let CommandResponse::ActionApplied { action, .. } = applied {
            println!("  {} {} {}", action.player_name, action.action_type, action.amount);
        }
    }
    Ok(())
}

fn print_state(title: &str, state: &GameStateDto) {
    println!();
    println!("---------------- {title} ----------------");
    println!(
        "банк {} | min_bet {} | дилер {} | ход {}",
        state.pot_amount, state.min_bet, state.dealer_index, state.current_player_index
    );
    for (seat, p) in state.players.iter().enumerate() {
        println!(
            "  [{seat}] {:<6} стек {:>5} ставка {:>4} {} {}",
            p.name,
            p.stack,
            p.current_bet,
            p.cards.join(" "),
            if p.is_all_in {
                "ALL-IN"
            } else if !p.is_active {
                "fold"
            } else {
                ""
            }
        );
    }
}
