//! Определение победителя и расчёт выплат.
//!
//! Правила:
//! - один претендент на банк - забирает всё без вскрытия (`Uncontested`);
//! - иначе борд доезжает до 5 карт из колоды этой же раздачи, каждая рука
//!   (2 карманные + 5 общих) уходит оракулу, банк делят все с максимальным рангом;
//! - нечётные фишки сплита раздаются по одной, начиная с первого места слева от дилера;
//! - ошибка оракула пробрасывается как `EvaluationFailure`, фишки не двигаются.

use core::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;
use crate::engine::positions::seats_from;
use crate::eval::{Evaluation, HandEvaluator};

/// Почему банк ушёл именно так.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// Все, кроме одного, сфолдили.
    Uncontested,
    /// Сравнение рук на вскрытии.
    Showdown,
}

impl WinReason {
    pub fn as_str(self) -> &'static str {
        match self {
            WinReason::Uncontested => "uncontested",
            WinReason::Showdown => "showdown",
        }
    }
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Выплата одному игроку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub seat: SeatIndex,
    pub name: String,
    pub amount: Chips,
}

/// Рука игрока, вскрытая на шоудауне.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownHand {
    pub seat: SeatIndex,
    pub name: String,
    pub hole_cards: Vec<Card>,
    pub evaluation: Evaluation,
}

/// Итог раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    pub reason: WinReason,
    /// Выплаты в порядке мест слева от дилера.
    pub payouts: Vec<Payout>,
    /// Лучшая рука (None без вскрытия).
    pub winning_hand: Option<Evaluation>,
    pub showdown_hands: Vec<ShowdownHand>,
    /// Итоговый борд (с учётом доезда).
    pub board: Vec<Card>,
    /// Карты, которые пришлось доложить на борд при вскрытии до ривера.
    pub run_out: Vec<Card>,
    pub total_pot: Chips,
}

impl HandResult {
    pub fn total_paid(&self) -> Chips {
        self.payouts.iter().map(|p| p.amount).sum()
    }

    pub fn winner_names(&self) -> Vec<&str> {
        self.payouts.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn is_split(&self) -> bool {
        self.payouts.len() > 1
    }

    /// Текст для истории раздач: "uncontested" или "showdown: Pair of Kings".
    pub fn summary(&self) -> String {
        match &self.winning_hand {
            Some(eval) => format!("{}: {}", self.reason, eval.description),
            None => self.reason.to_string(),
        }
    }
}

/// Всё, что нужно резолверу от конечного состояния раздачи.
#[derive(Clone, Copy, Debug)]
pub struct ShowdownInput<'a> {
    pub players: &'a [Player],
    pub board: &'a [Card],
    /// Колода раздачи: из неё доезжает борд. Резолвер её не меняет.
    pub deck: &'a Deck,
    pub pot: Chips,
    pub dealer_index: SeatIndex,
}

pub struct WinnerResolver<'e, E: HandEvaluator + ?Sized> {
    evaluator: &'e E,
}

impl<'e, E: HandEvaluator + ?Sized> WinnerResolver<'e, E> {
    pub fn new(evaluator: &'e E) -> Self {
        Self { evaluator }
    }

    /// Посчитать выплаты. Ничего не мутирует: применение - дело движка.
    pub fn resolve(&self, input: &ShowdownInput<'_>) -> Result<HandResult, EngineError> {
        let count = input.players.len();
        // Порядок мест слева от дилера - он же порядок раздачи нечётных фишек.
        let contenders: Vec<SeatIndex> = seats_from((input.dealer_index + 1) % count.max(1), count)
            .filter(|&seat| input.players[seat].is_active())
            .collect();

        match contenders.as_slice() {
            [] => Err(EngineError::illegal("в раздаче не осталось претендентов на банк")),
            [single] => Ok(self.uncontested(input, *single)),
            _ => self.showdown(input, &contenders),
        }
    }

    fn uncontested(&self, input: &ShowdownInput<'_>, seat: SeatIndex) -> HandResult {
        let player = &input.players[seat];
        debug!("банк {} без вскрытия уходит {}", input.pot, player.name);
        HandResult {
            reason: WinReason::Uncontested,
            payouts: vec![Payout {
                seat,
                name: player.name.clone(),
                amount: input.pot,
            }],
            winning_hand: None,
            showdown_hands: Vec::new(),
            board: input.board.to_vec(),
            run_out: Vec::new(),
            total_pot: input.pot,
        }
    }

    fn showdown(
        &self,
        input: &ShowdownInput<'_>,
        contenders: &[SeatIndex],
    ) -> Result<HandResult, EngineError> {
        let missing = Street::Showdown.board_size().saturating_sub(input.board.len());
        let run_out = input.deck.peek_n(missing)?;
        let full_board: Vec<Card> = input.board.iter().chain(run_out.iter()).copied().collect();

        let mut hands = Vec::with_capacity(contenders.len());
        for &seat in contenders {
            let player = &input.players[seat];
            let mut seven = player.hole_cards.clone();
            seven.extend_from_slice(&full_board);

            let evaluation = self.evaluator.evaluate7(&seven).map_err(|e| {
                warn!("оракул не оценил руку {}: {e}", player.name);
                EngineError::EvaluationFailure(e)
            })?;

            hands.push(ShowdownHand {
                seat,
                name: player.name.clone(),
                hole_cards: player.hole_cards.clone(),
                evaluation,
            });
        }

        let best = hands
            .iter()
            .map(|h| h.evaluation.rank)
            .max()
            .ok_or_else(|| EngineError::illegal("нет рук для сравнения"))?;
        let winners: Vec<&ShowdownHand> =
            hands.iter().filter(|h| h.evaluation.rank == best).collect();

        let (share, remainder) = input.pot.split(winners.len());
        let odd_chips = usize::try_from(remainder.0).unwrap_or(usize::MAX);
        let payouts = winners
            .iter()
            .enumerate()
            .map(|(i, h)| Payout {
                seat: h.seat,
                name: h.name.clone(),
                amount: if i < odd_chips { share + Chips(1) } else { share },
            })
            .collect();

        let winning_hand = winners.first().map(|h| h.evaluation.clone());
        Ok(HandResult {
            reason: WinReason::Showdown,
            payouts,
            winning_hand,
            showdown_hands: hands,
            board: full_board,
            run_out,
            total_pot: input.pot,
        })
    }
}
