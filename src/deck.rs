//! The draw deck.

use core::fmt;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};

/// An ordered stack of cards. The top of the deck is the end of the vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a populated, unshuffled 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.populate();
        deck
    }

    /// Creates a deck from the given cards. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Replaces the contents with one card per suit and rank, suit-major.
    pub fn populate(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Randomly reorders the cards with a uniform Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
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

/// Lists the cards from the top of the deck down, one per line.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.cards.iter().rev() {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::string::ToString;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn key(card: &Card) -> (Suit, u8) {
        (card.suit(), card.rank())
    }

    #[test]
    fn populate_builds_every_suit_and_rank_once() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: BTreeSet<_> = deck.cards().iter().map(key).collect();
        assert_eq!(unique.len(), DECK_SIZE);
        for suit in Suit::ALL {
            assert_eq!(deck.cards().iter().filter(|c| c.suit() == suit).count(), 13);
        }
    }

    #[test]
    fn populate_replaces_previous_contents() {
        let mut deck = Deck::from_cards(alloc::vec![Card::new(Suit::Hearts, 4); 3]);
        deck.populate();
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_preserves_cards_and_changes_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let original = Deck::standard();

        let mut changed = 0;
        for _ in 0..5 {
            let mut deck = original.clone();
            deck.shuffle(&mut rng);

            let before: BTreeSet<_> = original.cards().iter().map(key).collect();
            let after: BTreeSet<_> = deck.cards().iter().map(key).collect();
            assert_eq!(deck.len(), DECK_SIZE);
            assert_eq!(before, after);

            if deck != original {
                changed += 1;
            }
        }
        assert!(changed >= 4);
    }

    #[test]
    fn draw_empties_the_deck() {
        let mut deck = Deck::standard();
        for remaining in (0..DECK_SIZE).rev() {
            assert!(deck.draw().is_some());
            assert_eq!(deck.len(), remaining);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.peek(), None);
    }

    #[test]
    fn peek_and_draw_use_the_top() {
        let bottom = Card::new(Suit::Clubs, 2);
        let top = Card::new(Suit::Spades, 9);
        let mut deck = Deck::from_cards(alloc::vec![bottom, top]);

        assert_eq!(deck.peek(), Some(&top));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.draw(), Some(top));
        assert_eq!(deck.draw(), Some(bottom));
    }

    #[test]
    fn display_lists_top_first() {
        let deck = Deck::from_cards(alloc::vec![
            Card::new(Suit::Clubs, 1),
            Card::new(Suit::Hearts, 12),
        ]);
        assert_eq!(deck.to_string(), "Queen of Hearts\nAce of Clubs\n");
    }
}
