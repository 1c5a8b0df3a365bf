//! Game configuration options.

/// What to do when a drawn card has no legal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum StallPolicy {
    /// Abandon the frame, start a new one and draw again.
    #[default]
    ResetFrame,
    /// Keep the card active and stop; the caller must start a new frame.
    Halt,
}

/// Configuration options for a bowling game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bowlrs::{GameOptions, StallPolicy};
///
/// let options = GameOptions::default()
///     .with_ball_capacity(3)
///     .with_stall_policy(StallPolicy::Halt);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards a ball pile holds before it is thrown.
    pub ball_capacity: u8,
    /// Handling of a drawn card with no legal target.
    pub stall_policy: StallPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ball_capacity: 3,
            stall_policy: StallPolicy::ResetFrame,
        }
    }
}

impl GameOptions {
    /// Sets the ball capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use bowlrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ball_capacity(4);
    /// assert_eq!(options.ball_capacity, 4);
    /// ```
    #[must_use]
    pub const fn with_ball_capacity(mut self, capacity: u8) -> Self {
        self.ball_capacity = capacity;
        self
    }

    /// Sets the stall policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bowlrs::{GameOptions, StallPolicy};
    ///
    /// let options = GameOptions::default().with_stall_policy(StallPolicy::Halt);
    /// assert_eq!(options.stall_policy, StallPolicy::Halt);
    /// ```
    #[must_use]
    pub const fn with_stall_policy(mut self, policy: StallPolicy) -> Self {
        self.stall_policy = policy;
        self
    }
}
