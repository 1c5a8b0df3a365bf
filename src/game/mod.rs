//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::event::Event;
use crate::options::{GameOptions, StallPolicy};
use crate::pile::{Pile, PileId};

mod play;
pub mod state;
mod targets;

pub use state::GameState;
pub use targets::legal_targets;

/// Number of ball piles.
pub const BALL_COUNT: usize = 2;

/// Number of pin piles.
pub const PIN_COUNT: usize = 10;

/// A bowling solitaire engine that owns the deck, the piles and the active
/// card.
///
/// Every transition returns the [`Event`]s it produced, so a front end can
/// render the game without the engine knowing about it.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw this frame.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The drawn card waiting to be played.
    active: Option<Card>,
    /// Ball piles, left to right.
    balls: [Pile; BALL_COUNT],
    /// Pin piles, left to right.
    pins: [Pile; PIN_COUNT],
    /// Frames started this session.
    frame: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck and piles start empty; call [`Game::start_game`] to deal the
    /// first frame.
    ///
    /// # Example
    ///
    /// ```
    /// use bowlrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingDraw);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            options,
            state: GameState::AwaitingDraw,
            active: None,
            balls: [const { Pile::new() }; BALL_COUNT],
            pins: [const { Pile::new() }; PIN_COUNT],
            frame: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a new frame and draws its first card.
    pub fn start_game(&mut self) -> Vec<Event> {
        let mut events = self.next_frame();
        events.extend(self.draw_next());
        events
    }

    /// Advances to the next frame.
    ///
    /// Repopulates and shuffles the deck and clears every pile. Any active
    /// card is discarded, so [`Game::draw_next`] must follow.
    pub fn next_frame(&mut self) -> Vec<Event> {
        self.deck.populate();
        self.deck.shuffle(&mut self.rng);

        for pile in self.balls.iter_mut().chain(self.pins.iter_mut()) {
            pile.clear();
        }

        self.active = None;
        self.state = GameState::AwaitingDraw;
        self.frame += 1;

        alloc::vec![Event::FrameStarted { frame: self.frame }]
    }

    /// Draws the next card and makes it active.
    ///
    /// Does nothing if a card is already active. An empty deck moves the game
    /// to [`GameState::DeckExhausted`]. A card with no legal target is
    /// handled according to [`GameOptions::stall_policy`].
    pub fn draw_next(&mut self) -> Vec<Event> {
        if self.active.is_some() {
            return Vec::new();
        }

        let Some(card) = self.deck.draw() else {
            self.state = GameState::DeckExhausted;
            return alloc::vec![Event::DeckExhausted];
        };

        self.active = Some(card);
        self.state = GameState::AwaitingPlay;

        let mut events = alloc::vec![Event::CardDrawn(card)];
        if self.legal_targets().is_empty() {
            events.extend(self.stall(card));
        }
        events
    }

    fn stall(&mut self, card: Card) -> Vec<Event> {
        let mut events = alloc::vec![Event::Stalled(card)];
        match self.options.stall_policy {
            StallPolicy::ResetFrame => {
                events.extend(self.next_frame());
                events.extend(self.draw_next());
            }
            StallPolicy::Halt => {
                self.state = GameState::Stalled;
            }
        }
        events
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the card waiting to be played.
    #[must_use]
    pub const fn active_card(&self) -> Option<Card> {
        self.active
    }

    /// Returns the number of frames started this session.
    #[must_use]
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the pile with the given identifier.
    ///
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Ball(index) => self.ball(index),
            PileId::Pin(index) => self.pin(index),
        }
    }

    /// Returns the top card of a pile.
    #[must_use]
    pub fn pile_top(&self, id: PileId) -> Option<Card> {
        self.pile(id).and_then(Pile::top).copied()
    }

    /// Returns the number of cards in a pile, or `None` if it does not exist.
    #[must_use]
    pub fn pile_size(&self, id: PileId) -> Option<usize> {
        self.pile(id).map(Pile::size)
    }

    /// Returns a ball pile by index.
    #[must_use]
    pub fn ball(&self, index: usize) -> Option<&Pile> {
        self.balls.get(index)
    }

    /// Returns a pin pile by index.
    #[must_use]
    pub fn pin(&self, index: usize) -> Option<&Pile> {
        self.pins.get(index)
    }

    /// Returns the ball piles.
    #[must_use]
    pub const fn balls(&self) -> &[Pile; BALL_COUNT] {
        &self.balls
    }

    /// Returns the pin piles.
    #[must_use]
    pub const fn pins(&self) -> &[Pile; PIN_COUNT] {
        &self.pins
    }

    /// Returns the number of pin piles holding at least one card.
    #[must_use]
    pub fn filled_pins(&self) -> usize {
        self.pins.iter().filter(|pin| pin.top().is_some()).count()
    }
}
