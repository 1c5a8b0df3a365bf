use alloc::vec::Vec;

use crate::pile::{Pile, PileId};

use super::Game;

/// Returns the piles a card of the given rank may be played on.
///
/// Pins are kept in rank order from left to right:
///
/// 1. If a pin's top card has the same rank, that pin is the only target
///    (the leftmost one wins if several match).
/// 2. Otherwise every pin strictly between the rightmost lower-ranked top and
///    the leftmost higher-ranked top is a target. Empty pins do not bound the
///    range.
/// 3. If that range is empty, the first ball holding fewer than
///    `ball_capacity` cards is the only target.
/// 4. If every ball is full, there is no target.
///
/// # Example
///
/// ```
/// use bowlrs::{Card, Pile, PileId, Suit, legal_targets};
///
/// let mut pins: [Pile; 10] = Default::default();
/// pins[2].add(Card::new(Suit::Clubs, 3));
/// pins[5].add(Card::new(Suit::Hearts, 9));
/// let balls: [Pile; 2] = Default::default();
///
/// let targets = legal_targets(&pins, &balls, 6, 3);
/// assert_eq!(targets, vec![PileId::Pin(3), PileId::Pin(4)]);
/// ```
#[must_use]
pub fn legal_targets(pins: &[Pile], balls: &[Pile], rank: u8, ball_capacity: usize) -> Vec<PileId> {
    let mut lower: Option<usize> = None;
    let mut upper = pins.len();

    for (index, pin) in pins.iter().enumerate() {
        let Some(top) = pin.top() else {
            continue;
        };

        if top.rank() == rank {
            return alloc::vec![PileId::Pin(index)];
        }
        if top.rank() < rank {
            lower = Some(index);
        }
        if top.rank() > rank && index < upper {
            upper = index;
        }
    }

    let start = lower.map_or(0, |index| index + 1);
    if start < upper {
        return (start..upper).map(PileId::Pin).collect();
    }

    balls
        .iter()
        .position(|ball| ball.size() < ball_capacity)
        .map(PileId::Ball)
        .into_iter()
        .collect()
}

impl Game {
    /// Returns the piles the active card may be played on.
    ///
    /// Empty if there is no active card.
    #[must_use]
    pub fn legal_targets(&self) -> Vec<PileId> {
        self.active.map_or_else(Vec::new, |card| {
            legal_targets(
                &self.pins,
                &self.balls,
                card.rank(),
                usize::from(self.options.ball_capacity),
            )
        })
    }

    /// Returns whether the active card may be played on the given pile.
    #[must_use]
    pub fn is_legal_target(&self, id: PileId) -> bool {
        self.legal_targets().contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::game::{BALL_COUNT, PIN_COUNT};

    fn table(tops: &[(usize, u8)]) -> [Pile; PIN_COUNT] {
        let mut pins: [Pile; PIN_COUNT] = Default::default();
        for &(index, rank) in tops {
            pins[index].add(Card::new(Suit::Spades, rank));
        }
        pins
    }

    fn balls_with(sizes: [usize; BALL_COUNT]) -> [Pile; BALL_COUNT] {
        let mut balls: [Pile; BALL_COUNT] = Default::default();
        for (ball, size) in balls.iter_mut().zip(sizes) {
            for _ in 0..size {
                ball.add(Card::new(Suit::Diamonds, 1));
            }
        }
        balls
    }

    #[test]
    fn empty_pins_are_all_targets() {
        let pins = table(&[]);
        let targets = legal_targets(&pins, &balls_with([0, 0]), 7, 3);
        assert_eq!(targets, (0..PIN_COUNT).map(PileId::Pin).collect::<Vec<_>>());
    }

    #[test]
    fn exact_match_is_the_only_target() {
        let pins = table(&[(1, 5), (3, 8)]);
        let targets = legal_targets(&pins, &balls_with([0, 0]), 5, 3);
        assert_eq!(targets, alloc::vec![PileId::Pin(1)]);
    }

    #[test]
    fn exact_match_prefers_leftmost_pin() {
        let pins = table(&[(4, 6), (7, 6)]);
        let targets = legal_targets(&pins, &balls_with([0, 0]), 6, 3);
        assert_eq!(targets, alloc::vec![PileId::Pin(4)]);
    }

    #[test]
    fn gap_between_bounds_is_targetable() {
        let pins = table(&[(2, 3), (5, 9)]);
        let targets = legal_targets(&pins, &balls_with([0, 0]), 6, 3);
        assert_eq!(targets, alloc::vec![PileId::Pin(3), PileId::Pin(4)]);
    }

    #[test]
    fn open_ends_extend_to_the_edges() {
        let pins = table(&[(6, 4)]);
        assert_eq!(
            legal_targets(&pins, &balls_with([0, 0]), 2, 3),
            (0..6).map(PileId::Pin).collect::<Vec<_>>()
        );
        assert_eq!(
            legal_targets(&pins, &balls_with([0, 0]), 11, 3),
            alloc::vec![PileId::Pin(7), PileId::Pin(8), PileId::Pin(9)]
        );
    }

    #[test]
    fn adjacent_bounds_fall_back_to_first_open_ball() {
        let pins = table(&[(3, 2), (4, 10)]);
        assert_eq!(
            legal_targets(&pins, &balls_with([0, 0]), 7, 3),
            alloc::vec![PileId::Ball(0)]
        );
        assert_eq!(
            legal_targets(&pins, &balls_with([3, 1]), 7, 3),
            alloc::vec![PileId::Ball(1)]
        );
    }

    #[test]
    fn inverted_bounds_fall_back_to_ball() {
        let pins = table(&[(0, 9), (5, 3)]);
        assert_eq!(
            legal_targets(&pins, &balls_with([0, 0]), 6, 3),
            alloc::vec![PileId::Ball(0)]
        );
    }

    #[test]
    fn full_balls_leave_no_target() {
        let pins = table(&[(0, 5)]);
        assert!(legal_targets(&pins, &balls_with([3, 3]), 1, 3).is_empty());
    }
}
