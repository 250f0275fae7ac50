use std::str::FromStr;

use log::info;

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::TableConfig;
use crate::engine::actions::{ActionType, PlayerActionKind};
use crate::engine::{HandEngine, RandomSource};
use crate::eval::HandEvaluator;
use crate::infra::ids::parse_hand_id;
use crate::infra::mapping::build_hand_record;
use crate::infra::persistence::HandStore;

use super::commands::{Command, CommandResponse, NewPlayer};
use super::dto::{ActionDto, GameStateDto, HandHistoryItemDto, WinnerDto};
use super::errors::ApiError;
use super::queries::{Query, QueryResponse};

/// Один стол: движок, оракул и хранилище истории.
///
/// Все команды идут через `&mut self`, поэтому для конкурентного сервера
/// каждый `TableService` заворачивается в свой собственный лок или таск.
pub struct TableService<R: RandomSource, E: HandEvaluator, S: HandStore> {
    engine: HandEngine<R>,
    evaluator: E,
    store: S,
}

impl<R: RandomSource, E: HandEvaluator, S: HandStore> TableService<R, E, S> {
    pub fn new(config: TableConfig, rng: R, evaluator: E, store: S) -> Result<Self, ApiError> {
        Ok(Self {
            engine: HandEngine::new(config, rng)?,
            evaluator,
            store,
        })
    }

    pub fn engine(&self) -> &HandEngine<R> {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::StartHand { players } => {
                let players = players
                    .into_iter()
                    .map(new_player)
                    .collect::<Result<Vec<_>, _>>()?;
                let hand_id = self.engine.start_hand(players)?;
                Ok(CommandResponse::HandStarted {
                    hand_id: hand_id.to_string(),
                    state: self.state_dto(),
                })
            }

            Command::DealFlop => {
                let cards = self.engine.deal_flop()?;
                Ok(self.cards_dealt(cards.iter().map(ToString::to_string).collect()))
            }
            Command::DealTurn => {
                let card = self.engine.deal_turn()?;
                Ok(self.cards_dealt(vec![card.to_string()]))
            }
            Command::DealRiver => {
                let card = self.engine.deal_river()?;
                Ok(self.cards_dealt(vec![card.to_string()]))
            }

            Command::PlayerAction {
                player_index,
                action,
                amount,
            } => {
                let kind = parse_action(&action, amount)?;
                let record = self.engine.apply_action(player_index, kind)?;
                Ok(CommandResponse::ActionApplied {
                    action: ActionDto::from(&record),
                    state: self.state_dto(),
                })
            }

            Command::CompleteHand => {
                let result = self.engine.resolve_winner(&self.evaluator)?;
                let record = build_hand_record(&self.engine)?;
                let hand_id = record.hand_id;
                let saved = self.store.save_hand(record)?;
                info!("раздача {hand_id} записана в историю: {saved}");
                Ok(CommandResponse::HandCompleted {
                    winner: WinnerDto::from(&result),
                    saved,
                    state: self.state_dto(),
                })
            }
        }
    }

    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::State => Ok(QueryResponse::State(self.state_dto())),

            Query::HandHistory { limit } => {
                let hands = self.store.recent_hands(limit)?;
                Ok(QueryResponse::HandHistory(
                    hands.iter().map(HandHistoryItemDto::from).collect(),
                ))
            }

            Query::HandActions { hand_id } => {
                let hand_id = parse_hand_id(&hand_id)
                    .map_err(|e| ApiError::BadRequest(format!("hand_id {hand_id:?}: {e}")))?;
                let actions = self.store.hand_actions(hand_id)?;
                Ok(QueryResponse::HandActions(
                    actions.iter().map(ActionDto::from).collect(),
                ))
            }
        }
    }

    fn cards_dealt(&self, cards: Vec<String>) -> CommandResponse {
        CommandResponse::CardsDealt {
            cards,
            state: self.state_dto(),
        }
    }

    fn state_dto(&self) -> GameStateDto {
        let snapshot = self.engine.current_state();
        let legal = self
            .engine
            .legal_actions(snapshot.current_player_index)
            .into_iter()
            .map(|a| a.as_str().to_string())
            .collect();
        GameStateDto::from_snapshot(&snapshot, legal)
    }
}

fn new_player(p: NewPlayer) -> Result<Player, ApiError> {
    let name = p.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("пустое имя игрока".into()));
    }
    Ok(Player::new(name, Chips(p.stack)))
}

/// Строка действия + сумма -> `PlayerActionKind`.
pub fn parse_action(action: &str, amount: Option<u64>) -> Result<PlayerActionKind, ApiError> {
    let kind = ActionType::from_str(action).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if kind.is_forced() {
        return Err(ApiError::BadRequest(format!("{kind} ставит только движок")));
    }
    let amount = match (kind, amount) {
        (ActionType::Bet | ActionType::Raise, None) => {
            return Err(ApiError::BadRequest(format!("для {kind} нужна сумма")));
        }
        (_, amount) => Chips(amount.unwrap_or(0)),
    };
    PlayerActionKind::from_parts(kind, amount).map_err(|e| ApiError::BadRequest(e.to_string()))
}
