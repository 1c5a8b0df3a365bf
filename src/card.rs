//! Card types and naming.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in the order a deck is populated.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's name as used in card display names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the suit symbol printed on the card face.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(CardError::UnknownSuit)
    }
}

/// Lowest valid rank (Ace).
pub const MIN_RANK: u8 = 1;

/// Highest valid rank (King).
pub const MAX_RANK: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Suit and rank are fixed at construction; a card only ever moves between
/// containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `1..=13`. Use [`Card::try_new`] for
    /// untrusted input.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        assert!(
            rank >= MIN_RANK && rank <= MAX_RANK,
            "card rank must be in 1..=13"
        );
        Self { suit, rank }
    }

    /// Creates a new card, rejecting ranks outside `1..=13`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the full rank name, e.g. `"Ace"` or `"Seven"`.
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        match self.rank {
            1 => "Ace",
            2 => "Two",
            3 => "Three",
            4 => "Four",
            5 => "Five",
            6 => "Six",
            7 => "Seven",
            8 => "Eight",
            9 => "Nine",
            10 => "Ten",
            11 => "Jack",
            12 => "Queen",
            _ => "King",
        }
    }

    /// Returns the rank as printed in a card corner, e.g. `"A"` or `"10"`.
    #[must_use]
    pub const fn rank_abbreviation(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }

    /// Returns a short face label such as `"Q♠"`.
    #[must_use]
    pub fn label(&self) -> alloc::string::String {
        let mut label = alloc::string::String::from(self.rank_abbreviation());
        label.push_str(self.suit.symbol());
        label
    }
}

/// Formats the display name, e.g. `"King of Spades"`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}
