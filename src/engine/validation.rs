use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::actions::{ActionType, PlayerActionKind};
use crate::engine::betting::{amount_to_call, max_current_bet, BettingState};
use crate::engine::errors::EngineError;

/// Проверить действие игрока при текущем состоянии ставок.
///
/// Возвращает, сколько фишек действие переносит из стека в банк.
/// Ничего не меняет: применение - дело `HandEngine`.
pub fn validate_action(
    player: &Player,
    action: &PlayerActionKind,
    players: &[Player],
    betting: &BettingState,
) -> Result<Chips, EngineError> {
    if !player.can_act() {
        return Err(EngineError::illegal(format!(
            "{} не может ходить (статус {:?})",
            player.name, player.status
        )));
    }

    let stack = player.stack;
    let max_bet = max_current_bet(players);

    match *action {
        PlayerActionKind::Fold => Ok(Chips::ZERO),

        PlayerActionKind::Check => {
            if player.current_bet == max_bet {
                Ok(Chips::ZERO)
            } else {
                Err(EngineError::illegal(format!(
                    "check невозможен: нужно доставить {}",
                    max_bet - player.current_bet
                )))
            }
        }

        PlayerActionKind::Call => {
            // Частичного call (и сайд-потов) нет: не хватает - только all-in.
            let to_call = amount_to_call(players, player);
            if to_call > stack {
                Err(EngineError::illegal(format!(
                    "call {to_call} больше стека {stack}"
                )))
            } else {
                Ok(to_call)
            }
        }

        PlayerActionKind::Bet(amount) => {
            if !max_bet.is_zero() {
                return Err(EngineError::illegal(
                    "bet возможен только пока на улице нет ставки",
                ));
            }
            if amount < betting.min_bet {
                return Err(EngineError::illegal(format!(
                    "bet {amount} меньше минимума {}",
                    betting.min_bet
                )));
            }
            if amount > stack {
                return Err(EngineError::illegal(format!(
                    "bet {amount} больше стека {stack}"
                )));
            }
            Ok(amount)
        }

        PlayerActionKind::Raise(amount) => {
            if max_bet.is_zero() {
                return Err(EngineError::illegal(
                    "raise возможен только поверх ставки, здесь нужен bet",
                ));
            }
            let min_raise = max_bet + betting.last_raise_amount;
            if amount < min_raise {
                return Err(EngineError::illegal(format!(
                    "raise {amount} меньше минимума {min_raise}"
                )));
            }
            if amount > stack {
                return Err(EngineError::illegal(format!(
                    "raise {amount} больше стека {stack}"
                )));
            }
            Ok(amount)
        }

        PlayerActionKind::AllIn => Ok(stack),
    }
}

/// Какие действия сейчас легальны для игрока (для отрисовки кнопок у клиента).
/// Для bet/raise проверяется минимально допустимая сумма.
pub fn legal_actions(player: &Player, players: &[Player], betting: &BettingState) -> Vec<ActionType> {
    if !player.can_act() {
        return Vec::new();
    }
    let max_bet = max_current_bet(players);
    let probes = [
        PlayerActionKind::Fold,
        PlayerActionKind::Check,
        PlayerActionKind::Call,
        PlayerActionKind::Bet(betting.min_bet),
        PlayerActionKind::Raise(max_bet + betting.last_raise_amount),
        PlayerActionKind::AllIn,
    ];
    probes
        .iter()
        .filter(|kind| validate_action(player, kind, players, betting).is_ok())
        .map(PlayerActionKind::action_type)
        .collect()
}
