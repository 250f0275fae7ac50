use crate::domain::card::card_tokens;
use crate::domain::chips::Chips;
use crate::domain::HandId;
use crate::engine::hand_history::ActionLog;
use crate::engine::{HandEngine, RandomSource};
use crate::infra::persistence::{ActionEntry, HandRecord, PlayerRecord, StoreError, WinnerInfo};

/// Лог движка -> записи для хранилища (порядок сохраняется).
pub fn action_entries(log: &ActionLog) -> Vec<ActionEntry> {
    log.records()
        .iter()
        .enumerate()
        .map(|(sequence, r)| ActionEntry {
            sequence,
            player_name: r.actor.clone(),
            seat: r.seat,
            action: r.kind,
            amount: r.amount,
            street: r.street,
        })
        .collect()
}

/// Собрать запись для хранилища из завершённой раздачи.
///
/// Стартовый стек восстанавливается как `итог - выигрыш + всё поставленное`.
pub fn build_hand_record<R: RandomSource>(
    engine: &HandEngine<R>,
) -> Result<HandRecord, StoreError> {
    let (hand_id, result): (HandId, _) = match (engine.hand_id(), engine.hand_result()) {
        (Some(id), Some(result)) => (id, result),
        _ => return Err(StoreError::HandNotFinished),
    };
    let log = engine.action_log();

    let players = engine
        .players()
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            let committed: Chips = log
                .records()
                .iter()
                .filter(|r| r.seat == seat)
                .map(|r| r.amount)
                .sum();
            let won: Chips = result
                .payouts
                .iter()
                .filter(|w| w.seat == seat)
                .map(|w| w.amount)
                .sum();
            PlayerRecord {
                seat,
                name: p.name.clone(),
                starting_stack: p.stack - won + committed,
                final_stack: p.stack,
                current_bet: p.current_bet,
                hole_cards: card_tokens(&p.hole_cards),
                status: p.status,
            }
        })
        .collect();

    Ok(HandRecord {
        hand_id,
        players,
        community_cards: card_tokens(engine.board()),
        pot_amount: result.total_pot,
        winner: WinnerInfo {
            reason: result.reason,
            payouts: result.payouts.clone(),
            hand_description: result.winning_hand.as_ref().map(|e| e.description.clone()),
        },
        actions: action_entries(log),
        created_at_seq: 0,
    })
}
