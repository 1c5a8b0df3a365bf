//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No card is active; the next step is drawing one.
    AwaitingDraw,
    /// A card is active and waiting to be played.
    AwaitingPlay,
    /// The active card has no legal target and the stall policy is `Halt`.
    Stalled,
    /// The deck ran out before a card could be drawn.
    DeckExhausted,
}
