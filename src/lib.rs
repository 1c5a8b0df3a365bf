//! A bowling solitaire card game engine with optional `no_std` support.
//!
//! Cards drawn from a shuffled deck are played onto ten pin piles, kept in
//! rank order left to right, or onto two ball piles. Filling every pin scores
//! a strike or a spare; filling a ball throws it for the number of standing
//! pins. The crate provides a [`Game`] type that owns the deck and piles,
//! computes legal targets and reports every transition as a list of
//! [`Event`]s, leaving rendering to the caller.
//!
//! # Example
//!
//! ```
//! use bowlrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let _events = game.start_game();
//!
//! let target = game.legal_targets()[0];
//! let _events = game.play(target).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod pile;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{CardError, PlayError};
pub use event::{Event, FrameResultEvent, FrameResultKind, ScoreEvent};
pub use game::{BALL_COUNT, Game, GameState, PIN_COUNT, legal_targets};
pub use options::{GameOptions, StallPolicy};
pub use pile::{Pile, PileId};
