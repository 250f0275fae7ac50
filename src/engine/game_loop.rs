use log::{debug, info, warn};

use crate::domain::card::{card_tokens, Card};
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::table::TableConfig;
use crate::domain::{HandId, SeatIndex};
use crate::engine::actions::{ActionType, PlayerActionKind};
use crate::engine::betting::{self, BettingState};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{ActionLog, ActionRecord};
use crate::engine::positions::{blind_seats, next_dealer, next_to_act, seats_from};
use crate::engine::pot::Pot;
use crate::engine::showdown::{HandResult, ShowdownInput, WinnerResolver};
use crate::engine::validation;
use crate::engine::RandomSource;
use crate::eval::HandEvaluator;
use crate::infra::ids::new_hand_id;
use crate::state::HandSnapshot;

/// Состояние одного стола: текущая раздача + позиция дилера между раздачами.
///
/// Все `&mut self` методы либо применяют изменение целиком, либо возвращают
/// ошибку и ничего не трогают.
pub struct HandEngine<R: RandomSource> {
    config: TableConfig,
    rng: R,
    hand_id: Option<HandId>,
    deck: Deck,
    players: Vec<Player>,
    board: Vec<Card>,
    pot: Pot,
    street: Street,
    betting: BettingState,
    /// Чей сейчас ход.
    current_player_index: SeatIndex,
    dealer_index: SeatIndex,
    small_blind_index: SeatIndex,
    big_blind_index: SeatIndex,
    log: ActionLog,
    /// Сумма фишек за столом на момент старта раздачи.
    total_chips: Chips,
    result: Option<HandResult>,
}

impl<R: RandomSource> HandEngine<R> {
    pub fn new(config: TableConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let big_blind = config.big_blind();
        Ok(Self {
            config,
            rng,
            hand_id: None,
            deck: Deck::standard_52(),
            players: Vec::new(),
            board: Vec::new(),
            pot: Pot::new(),
            street: Street::Preflop,
            betting: BettingState::new(big_blind),
            current_player_index: 0,
            dealer_index: 0,
            small_blind_index: 0,
            big_blind_index: 0,
            log: ActionLog::new(),
            total_chips: Chips::ZERO,
            result: None,
        })
    }

    /// Старт новой раздачи:
    /// - сдвигает кнопку;
    /// - тасует свежую колоду и раздаёт по 2 карты;
    /// - постит блайнды;
    /// - передаёт ход первому после BB, кто может ходить.
    pub fn start_hand(&mut self, players: Vec<Player>) -> Result<HandId, EngineError> {
        let count = players.len();
        let (min, max) = (self.config.min_players, self.config.max_players);
        if count < min || count > max {
            warn!("start_hand: {count} игроков, допустимо {min}..={max}");
            return Err(EngineError::InvalidPlayerCount { got: count, min, max });
        }

        let dealer = next_dealer(self.dealer_index, count);
        let (sb, bb) = blind_seats(dealer, count);

        // Всё собираем локально, в self пишем только когда ошибок уже быть не может.
        let mut players = players;
        for p in players.iter_mut() {
            p.reset_for_hand();
        }
        let total_chips: Chips = players.iter().map(|p| p.stack).sum();

        let mut deck = Deck::shuffled(&mut self.rng);
        for _round in 0..2 {
            for seat in seats_from((dealer + 1) % count, count) {
                let card = deck.draw()?;
                players[seat].hole_cards.push(card);
            }
        }

        let hand_id = new_hand_id();
        self.hand_id = Some(hand_id);
        self.deck = deck;
        self.players = players;
        self.board.clear();
        self.pot = Pot::new();
        self.street = Street::Preflop;
        self.log = ActionLog::new();
        self.result = None;
        self.total_chips = total_chips;
        self.dealer_index = dealer;
        self.small_blind_index = sb;
        self.big_blind_index = bb;

        self.post_blind(sb, self.config.small_blind(), ActionType::SmallBlind);
        let bb_posted = self.post_blind(bb, self.config.big_blind(), ActionType::BigBlind);
        self.betting = BettingState::new(bb_posted);

        self.current_player_index = next_to_act(&self.players, bb).unwrap_or((bb + 1) % count);

        info!(
            "раздача {hand_id}: {count} игроков, дилер {dealer}, sb {sb}, bb {bb}, банк {}",
            self.pot.total
        );
        Ok(hand_id)
    }

    fn post_blind(&mut self, seat: SeatIndex, amount: Chips, kind: ActionType) -> Chips {
        let player = &mut self.players[seat];
        let paid = player.commit(amount);
        self.pot.add(paid);
        self.log.push(ActionRecord {
            actor: player.name.clone(),
            seat,
            kind,
            amount: paid,
            street: Street::Preflop,
        });
        debug!("{} постит {kind} {paid}", player.name);
        paid
    }

    /// Перейти на улицу `target` и открыть её карты.
    /// Возвращает только что выложенные карты.
    pub fn deal_street(&mut self, target: Street) -> Result<Vec<Card>, EngineError> {
        self.ensure_started()?;
        let from = self.street;
        let dealable = matches!(target, Street::Flop | Street::Turn | Street::River);
        if !dealable || target.predecessor() != Some(from) {
            warn!("переход {from} -> {target} отклонён");
            return Err(EngineError::IllegalStreetTransition { from, to: target });
        }
        if !self.is_street_complete() {
            warn!("{target} открывается при незакрытой улице {from}, ставки улицы сбрасываются");
        }

        let cards = self.deck.draw_n(target.cards_to_deal())?;
        self.board.extend_from_slice(&cards);
        self.street = target;

        for p in self.players.iter_mut() {
            p.current_bet = Chips::ZERO;
        }
        self.betting.reset_for_street(self.config.big_blind());

        let count = self.players.len();
        self.current_player_index = next_to_act(&self.players, self.dealer_index)
            .unwrap_or((self.dealer_index + 1) % count);

        debug!(
            "{target}: {}, ход места {}",
            card_tokens(&cards).join(" "),
            self.current_player_index
        );
        Ok(cards)
    }

    pub fn deal_flop(&mut self) -> Result<Vec<Card>, EngineError> {
        self.deal_street(Street::Flop)
    }

    pub fn deal_turn(&mut self) -> Result<Card, EngineError> {
        self.deal_single(Street::Turn)
    }

    pub fn deal_river(&mut self) -> Result<Card, EngineError> {
        self.deal_single(Street::River)
    }

    fn deal_single(&mut self, target: Street) -> Result<Card, EngineError> {
        self.deal_street(target)?
            .into_iter()
            .next()
            .ok_or(EngineError::EmptyDeck)
    }

    /// Применить действие игрока на месте `seat`.
    pub fn apply_action(
        &mut self,
        seat: SeatIndex,
        action: PlayerActionKind,
    ) -> Result<ActionRecord, EngineError> {
        self.ensure_started()?;
        if self.street == Street::Showdown {
            return Err(EngineError::illegal("раздача уже завершена"));
        }
        if seat >= self.players.len() {
            return Err(EngineError::InvalidSeat(seat));
        }
        if seat != self.current_player_index {
            warn!("ход вне очереди: место {seat}, ожидалось {}", self.current_player_index);
            return Err(EngineError::InvalidTurn {
                expected: self.current_player_index,
                got: seat,
            });
        }
        if betting::active_count(&self.players) <= 1 {
            return Err(EngineError::illegal("в раздаче остался один игрок"));
        }

        let amount =
            validation::validate_action(&self.players[seat], &action, &self.players, &self.betting)
                .map_err(|e| {
                    warn!("{} ({action:?}) отклонено: {e}", self.players[seat].name);
                    e
                })?;

        let player = &mut self.players[seat];
        match action {
            PlayerActionKind::Fold => {
                player.status = PlayerStatus::Folded;
            }
            PlayerActionKind::Check => {}
            PlayerActionKind::Call | PlayerActionKind::Bet(_) | PlayerActionKind::Raise(_) => {
                player.commit(amount);
            }
            PlayerActionKind::AllIn => {
                player.commit(amount);
                player.status = PlayerStatus::AllIn;
            }
        }
        let record = ActionRecord {
            actor: player.name.clone(),
            seat,
            kind: action.action_type(),
            amount,
            street: self.street,
        };

        self.pot.add(amount);
        if matches!(action, PlayerActionKind::Bet(_) | PlayerActionKind::Raise(_)) {
            self.betting.on_aggression(amount);
        }
        self.log.push(record.clone());

        if let Some(next) = next_to_act(&self.players, seat) {
            self.current_player_index = next;
        }

        debug!(
            "{} {} {}, банк {}, ход места {}",
            record.actor, record.kind, record.amount, self.pot.total, self.current_player_index
        );
        Ok(record)
    }

    pub fn is_street_complete(&self) -> bool {
        betting::is_street_complete(&self.players)
    }

    /// Определить победителя, доложить борд (если нужно) и выплатить банк.
    ///
    /// Доступно, когда торговать больше некому: один претендент, закрытый ривер,
    /// или закрытая улица, где ходить может не больше одного игрока (доезд борда).
    /// При ошибке оракула фишки не двигаются, раздача остаётся на своей улице.
    pub fn resolve_winner<E: HandEvaluator + ?Sized>(
        &mut self,
        evaluator: &E,
    ) -> Result<HandResult, EngineError> {
        self.ensure_started()?;
        if self.street == Street::Showdown {
            return Err(EngineError::IllegalStreetTransition {
                from: Street::Showdown,
                to: Street::Showdown,
            });
        }
        if !self.betting_finished() {
            warn!("resolve_winner на улице {}: торговля ещё идёт", self.street);
            return Err(EngineError::illegal("торговля в раздаче не закончена"));
        }

        let input = ShowdownInput {
            players: &self.players,
            board: &self.board,
            deck: &self.deck,
            pot: self.pot.total,
            dealer_index: self.dealer_index,
        };
        let result = WinnerResolver::new(evaluator).resolve(&input)?;

        if !result.run_out.is_empty() {
            self.deck.remove_cards(&result.run_out);
            self.board.extend_from_slice(&result.run_out);
        }
        self.pot.take_all();
        for payout in &result.payouts {
            self.players[payout.seat].stack += payout.amount;
        }
        for p in self.players.iter_mut() {
            p.current_bet = Chips::ZERO;
        }
        self.street = Street::Showdown;
        self.result = Some(result.clone());

        info!(
            "раздача {}: {} забирает {} ({})",
            self.hand_id.map(|id| id.to_string()).unwrap_or_default(),
            result.winner_names().join(", "),
            result.total_pot,
            result.summary()
        );
        Ok(result)
    }

    /// Какие действия сейчас доступны игроку. Пусто, если ход не его.
    pub fn legal_actions(&self, seat: SeatIndex) -> Vec<ActionType> {
        let live = self.hand_id.is_some()
            && self.street != Street::Showdown
            && betting::active_count(&self.players) > 1;
        if !live || seat != self.current_player_index {
            return Vec::new();
        }
        match self.players.get(seat) {
            Some(player) => validation::legal_actions(player, &self.players, &self.betting),
            None => Vec::new(),
        }
    }

    /// Банк + все стеки. Внутри раздачи всегда равно `total_chips()`.
    pub fn chips_in_play(&self) -> Chips {
        self.pot.total + self.players.iter().map(|p| p.stack).sum::<Chips>()
    }

    pub fn current_state(&self) -> HandSnapshot {
        HandSnapshot::from_engine(self)
    }

    /// Торговать больше некому: остался один претендент, либо улица закрыта
    /// и это ривер или ходить может не больше одного игрока.
    fn betting_finished(&self) -> bool {
        if betting::active_count(&self.players) <= 1 {
            return true;
        }
        if !self.is_street_complete() {
            return false;
        }
        self.street == Street::River || self.players.iter().filter(|p| p.can_act()).count() <= 1
    }

    fn ensure_started(&self) -> Result<(), EngineError> {
        if self.hand_id.is_none() {
            return Err(EngineError::NoActiveHand);
        }
        Ok(())
    }

    // ---------- accessors ----------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn hand_id(&self) -> Option<HandId> {
        self.hand_id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pot(&self) -> Chips {
        self.pot.total
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn betting(&self) -> &BettingState {
        &self.betting
    }

    pub fn min_bet(&self) -> Chips {
        self.betting.min_bet
    }

    pub fn last_raise_amount(&self) -> Chips {
        self.betting.last_raise_amount
    }

    pub fn current_player_index(&self) -> SeatIndex {
        self.current_player_index
    }

    pub fn dealer_index(&self) -> SeatIndex {
        self.dealer_index
    }

    pub fn small_blind_index(&self) -> SeatIndex {
        self.small_blind_index
    }

    pub fn big_blind_index(&self) -> SeatIndex {
        self.big_blind_index
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    pub fn total_chips(&self) -> Chips {
        self.total_chips
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn hand_result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}
