use crate::domain::player::Player;
use crate::domain::SeatIndex;

/// Места по кругу, начиная с `start` (включительно).
pub fn seats_from(start: SeatIndex, count: usize) -> impl Iterator<Item = SeatIndex> {
    (0..count).map(move |i| (start + i) % count.max(1))
}

/// Следующая позиция дилера: сдвиг на одно место по кругу.
pub fn next_dealer(previous: SeatIndex, count: usize) -> SeatIndex {
    if count == 0 {
        return 0;
    }
    (previous + 1) % count
}

/// (small blind, big blind) для кнопки `dealer`. Хедз-ап - по той же формуле.
pub fn blind_seats(dealer: SeatIndex, count: usize) -> (SeatIndex, SeatIndex) {
    let count = count.max(1);
    ((dealer + 1) % count, (dealer + 2) % count)
}

/// Первое место строго после `after` (по кругу, само `after` проверяется последним),
/// игрок на котором ещё может ходить. `None`, если ходить некому.
pub fn next_to_act(players: &[Player], after: SeatIndex) -> Option<SeatIndex> {
    let count = players.len();
    if count == 0 {
        return None;
    }
    seats_from((after + 1) % count, count).find(|&seat| players[seat].can_act())
}
