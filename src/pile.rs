//! Ball and pin piles.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;

/// Stable identifier of a pile on the table.
///
/// Identifiers never change across frames, so a front end can bind its
/// widgets to them once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PileId {
    /// Ball pile, index 0 or 1.
    Ball(usize),
    /// Pin pile, index 0 through 9, left to right.
    Pin(usize),
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ball(index) => write!(f, "ball {index}"),
            Self::Pin(index) => write!(f, "pin {index}"),
        }
    }
}

/// An ordered list of cards with the top card visible.
///
/// A pile performs no legality checks; the [`Game`](crate::Game) decides
/// what may be added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the top of the pile.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the top card, or `None` if the pile is empty.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards in the pile. Same as [`Pile::len`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn top_tracks_last_added() {
        let mut pile = Pile::new();
        assert_eq!(pile.top(), None);
        assert_eq!(pile.size(), 0);

        pile.add(Card::new(Suit::Hearts, 3));
        pile.add(Card::new(Suit::Clubs, 3));
        assert_eq!(pile.top(), Some(&Card::new(Suit::Clubs, 3)));
        assert_eq!(pile.size(), 2);
        assert_eq!(pile.len(), pile.size());

        pile.clear();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);
    }
}
