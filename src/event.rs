//! Events reported by game transitions.

use crate::card::Card;
use crate::pile::PileId;

/// Result of knocking down every pin in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameResultKind {
    /// All pins filled before the first ball was thrown.
    Strike,
    /// All pins filled after the first ball was thrown.
    Spare,
}

/// A ball was thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    /// The ball that was thrown.
    pub ball: usize,
    /// Number of pin piles holding at least one card when the ball was thrown.
    pub points: usize,
}

/// Every pin was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResultEvent {
    /// Strike or spare.
    pub kind: FrameResultKind,
}

/// Something observable that happened during a transition.
///
/// Transitions return their events in the order they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A new frame started with a freshly shuffled deck and empty piles.
    FrameStarted {
        /// 1-based frame number within the session.
        frame: u32,
    },
    /// A card was drawn and is now active.
    CardDrawn(Card),
    /// The active card was placed on a pile.
    CardPlayed {
        /// The card that was played.
        card: Card,
        /// Where it went.
        pile: PileId,
    },
    /// A ball was thrown.
    Score(ScoreEvent),
    /// A strike or spare ended the frame.
    FrameResult(FrameResultEvent),
    /// The drawn card had nowhere to go.
    Stalled(Card),
    /// The deck ran out; no card could be drawn.
    DeckExhausted,
}
