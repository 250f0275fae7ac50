use holdem_hand_engine::{
    api::{
        commands::{Command, CommandResponse, NewPlayer},
        errors::ApiError,
        queries::{Query, QueryResponse},
        service::{parse_action, TableService},
    },
    domain::{chips::Chips, table::TableConfig},
    engine::{actions::PlayerActionKind, EngineError},
    eval::StandardEvaluator,
    infra::{new_hand_id, InMemoryHandStore, UnshuffledRng},
};

type Service = TableService<UnshuffledRng, StandardEvaluator, InMemoryHandStore>;

/// Утилита: сервис со стандартными блайндами.
fn make_service() -> Service {
    TableService::new(
        TableConfig::default(),
        UnshuffledRng,
        StandardEvaluator,
        InMemoryHandStore::new(),
    )
    .unwrap()
}

fn start(service: &mut Service, names: &[&str]) -> String {
    let players = names.iter().map(|n| NewPlayer::new(*n, 1000)).collect();
    match service.execute(Command::StartHand { players }).unwrap() {
        CommandResponse::HandStarted { hand_id, .. } => hand_id,
        other => panic!("ожидали HandStarted, получили {other:?}"),
    }
}

fn act(service: &mut Service, seat: usize, action: &str, amount: Option<u64>) -> CommandResponse {
    service
        .execute(Command::PlayerAction {
            player_index: seat,
            action: action.to_string(),
            amount,
        })
        .unwrap()
}

//
// ---------- полный цикл ----------
//

#[test]
fn full_hand_through_service() {
    let mut service = make_service();
    let hand_id = start(&mut service, &["Alice", "Bob", "Carol"]);

    let state = match service.query(Query::State).unwrap() {
        QueryResponse::State(s) => s,
        other => panic!("{other:?}"),
    };
    assert_eq!(state.hand_id.as_deref(), Some(hand_id.as_str()));
    assert_eq!(state.pot_amount, 60);
    assert_eq!(state.current_street, "preflop");
    assert_eq!(state.current_player_index, 1);
    assert_eq!(state.dealer_index, 1);
    assert_eq!((state.small_blind_index, state.big_blind_index), (2, 0));
    assert_eq!(state.actions.len(), 2);
    assert_eq!(state.actions[0].action_type, "small_blind");
    assert!(state.legal_actions.contains(&"raise".to_string()));
    assert!(!state.legal_actions.contains(&"check".to_string()));

    let resp = act(&mut service, 1, "call", None);
    match &resp {
        CommandResponse::ActionApplied { action, .. } => {
            assert_eq!(action.player_name, "Bob");
            assert_eq!(action.action_type, "call");
            assert_eq!(action.amount, 40);
        }
        other => panic!("{other:?}"),
    }
    act(&mut service, 2, "call", None);

    match service.execute(Command::DealFlop).unwrap() {
        CommandResponse::CardsDealt { cards, state } => {
            assert_eq!(cards, vec!["8s", "7s", "6s"]);
            assert_eq!(state.current_street, "flop");
            assert_eq!(state.current_player_index, 2);
        }
        other => panic!("{other:?}"),
    }
    act(&mut service, 2, "bet", Some(100));
    act(&mut service, 0, "fold", None);
    let resp = act(&mut service, 1, "call", None);
    assert_eq!(resp.state().pot_amount, 320);

    service.execute(Command::DealTurn).unwrap();
    let resp = service.execute(Command::DealRiver).unwrap();
    assert_eq!(resp.state().community_cards.len(), 5);

    match service.execute(Command::CompleteHand).unwrap() {
        CommandResponse::HandCompleted { winner, saved, state } => {
            assert!(saved);
            assert_eq!(winner.reason, "showdown");
            assert_eq!(winner.winners.len(), 1);
            assert_eq!(winner.winners[0].name, "Bob");
            assert_eq!(winner.winners[0].amount, 320);
            assert_eq!(
                winner.hand_description.as_deref(),
                Some("Straight flush, Nine high")
            );
            assert_eq!(state.current_street, "showdown");
            assert_eq!(state.pot_amount, 0);
            assert!(state.legal_actions.is_empty());
        }
        other => panic!("{other:?}"),
    }
    assert_eq!(service.store().len(), 1);

    // история
    let history = match service.query(Query::HandHistory { limit: 10 }).unwrap() {
        QueryResponse::HandHistory(h) => h,
        other => panic!("{other:?}"),
    };
    assert_eq!(history.len(), 1);
    let item = &history[0];
    assert_eq!(item.hand_id, hand_id);
    assert_eq!(item.pot_amount, 320);
    assert_eq!(item.players[1].name, "Bob");
    assert_eq!(item.players[1].starting_stack, 1000);
    assert_eq!(item.players[1].final_stack, 1180);
    assert_eq!(item.winner.reason, "showdown");

    let actions = match service.query(Query::HandActions { hand_id }).unwrap() {
        QueryResponse::HandActions(a) => a,
        other => panic!("{other:?}"),
    };
    let kinds: Vec<&str> = actions.iter().map(|a| a.action_type.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["small_blind", "big_blind", "call", "call", "bet", "fold", "call"]
    );
    assert_eq!(actions[4].street, "flop");
}

#[test]
fn uncontested_hand_is_recorded_without_description() {
    let mut service = make_service();
    start(&mut service, &["Alice", "Bob"]);
    act(&mut service, 0, "fold", None);

    match service.execute(Command::CompleteHand).unwrap() {
        CommandResponse::HandCompleted { winner, saved, .. } => {
            assert!(saved);
            assert_eq!(winner.reason, "uncontested");
            assert_eq!(winner.winners[0].name, "Bob");
            assert!(winner.hand_description.is_none());
        }
        other => panic!("{other:?}"),
    }

    // повторный CompleteHand: раздача уже на шоудауне
    let err = service.execute(Command::CompleteHand).unwrap_err();
    assert_eq!(err.code(), "engine_error");
    assert_eq!(service.store().len(), 1);
}

#[test]
fn history_is_newest_first_and_limited() {
    let mut service = make_service();
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(start(&mut service, &["Alice", "Bob"]));
        // первый ход за тем, кто сейчас на SB
        let seat = service.engine().current_player_index();
        act(&mut service, seat, "fold", None);
        service.execute(Command::CompleteHand).unwrap();
    }

    let history = match service.query(Query::HandHistory { limit: 2 }).unwrap() {
        QueryResponse::HandHistory(h) => h,
        other => panic!("{other:?}"),
    };
    let got: Vec<&str> = history.iter().map(|h| h.hand_id.as_str()).collect();
    assert_eq!(got, vec![ids[2].as_str(), ids[1].as_str()]);
}

//
// ---------- ошибки ----------
//

#[test]
fn bad_requests() {
    let mut service = make_service();
    start(&mut service, &["Alice", "Bob", "Carol"]);

    let attempts = [
        ("dance", None),
        ("bet", None),
        ("raise", None),
        ("small_blind", None),
        ("big_blind", Some(40)),
    ];
    for (action, amount) in attempts {
        let err = service
            .execute(Command::PlayerAction {
                player_index: 1,
                action: action.to_string(),
                amount,
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)), "{action}: {err}");
        assert_eq!(err.code(), "bad_request");
    }
    // ничего не записалось в лог
    assert_eq!(service.engine().action_log().len(), 2);
}

#[test]
fn empty_player_name_is_rejected() {
    let mut service = make_service();
    let err = service
        .execute(Command::StartHand {
            players: vec![NewPlayer::new("Alice", 1000), NewPlayer::new("   ", 1000)],
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(service.engine().hand_id().is_none());
}

#[test]
fn engine_errors_pass_through() {
    let mut service = make_service();

    let err = service
        .execute(Command::StartHand {
            players: vec![NewPlayer::new("Alice", 1000)],
        })
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Engine(EngineError::InvalidPlayerCount { got: 1, min: 2, max: 6 })
    );

    let err = service.execute(Command::DealFlop).unwrap_err();
    assert_eq!(err.code(), "no_active_hand");

    start(&mut service, &["Alice", "Bob", "Carol"]);
    let err = service
        .execute(Command::PlayerAction {
            player_index: 2,
            action: "call".into(),
            amount: None,
        })
        .unwrap_err();
    assert_eq!(err.code(), "not_your_turn");

    let err = service.execute(Command::DealRiver).unwrap_err();
    assert_eq!(err.code(), "engine_error");
}

#[test]
fn hand_actions_query_errors() {
    let service = make_service();

    let err = service
        .query(Query::HandActions {
            hand_id: "garbage".into(),
        })
        .unwrap_err();
    assert_eq!(err.code(), "bad_request");

    let err = service
        .query(Query::HandActions {
            hand_id: new_hand_id().to_string(),
        })
        .unwrap_err();
    assert_eq!(err.code(), "not_found");
}

//
// ---------- parse_action ----------
//

#[test]
fn parse_action_variants() {
    assert_eq!(parse_action("fold", None).unwrap(), PlayerActionKind::Fold);
    assert_eq!(parse_action("check", Some(999)).unwrap(), PlayerActionKind::Check);
    assert_eq!(parse_action("call", None).unwrap(), PlayerActionKind::Call);
    assert_eq!(
        parse_action("bet", Some(50)).unwrap(),
        PlayerActionKind::Bet(Chips(50))
    );
    assert_eq!(
        parse_action("raise", Some(80)).unwrap(),
        PlayerActionKind::Raise(Chips(80))
    );
    assert_eq!(parse_action("all_in", None).unwrap(), PlayerActionKind::AllIn);
    assert!(parse_action("", None).is_err());
}

//
// ---------- serde ----------
//

#[test]
fn commands_from_json() {
    let cmd: Command =
        serde_json::from_str(r#"{"type":"player_action","player_index":1,"action":"call"}"#)
            .unwrap();
    assert_eq!(
        cmd,
        Command::PlayerAction {
            player_index: 1,
            action: "call".into(),
            amount: None,
        }
    );

    let cmd: Command = serde_json::from_str(
        r#"{"type":"start_hand","players":[{"name":"Alice","stack":500},{"name":"Bob","stack":700}]}"#,
    )
    .unwrap();
    assert_eq!(
        cmd,
        Command::StartHand {
            players: vec![NewPlayer::new("Alice", 500), NewPlayer::new("Bob", 700)],
        }
    );

    let cmd: Command = serde_json::from_str(r#"{"type":"complete_hand"}"#).unwrap();
    assert_eq!(cmd, Command::CompleteHand);

    let q: Query = serde_json::from_str(r#"{"type":"hand_history"}"#).unwrap();
    assert_eq!(q, Query::HandHistory { limit: 10 });
}

#[test]
fn responses_to_json() {
    let mut service = make_service();
    start(&mut service, &["Alice", "Bob"]);

    let json = serde_json::to_value(service.query(Query::State).unwrap()).unwrap();
    assert_eq!(json["type"], "state");
    assert_eq!(json["data"]["pot_amount"], 60);
    assert_eq!(json["data"]["players"][0]["name"], "Alice");

    let resp = act(&mut service, 0, "fold", None);
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["type"], "action_applied");
    assert_eq!(json["action"]["action_type"], "fold");
}
