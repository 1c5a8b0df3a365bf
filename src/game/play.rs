use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::event::{Event, FrameResultEvent, FrameResultKind, ScoreEvent};
use crate::pile::PileId;

use super::{BALL_COUNT, Game, GameState, PIN_COUNT};

impl Game {
    /// Plays the active card on the given pile.
    ///
    /// Filling a ball throws it for the number of filled pins; throwing the
    /// last ball ends the frame. Filling the last pin scores a strike, or a
    /// spare if the first ball was already thrown, and ends the frame. The
    /// next card is then drawn.
    ///
    /// Returns the events produced, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active card, the pile does not exist,
    /// or the active card cannot be played there. The game is left unchanged.
    pub fn play(&mut self, id: PileId) -> Result<Vec<Event>, PlayError> {
        let card = self.active.ok_or(PlayError::NoActiveCard)?;

        if self.pile(id).is_none() {
            return Err(PlayError::UnknownPile(id));
        }
        if !self.is_legal_target(id) {
            return Err(PlayError::IllegalTarget(id));
        }

        self.active = None;
        self.state = GameState::AwaitingDraw;

        let mut events = alloc::vec![Event::CardPlayed { card, pile: id }];
        let frame_over = match id {
            PileId::Ball(index) => self.play_ball(index, card, &mut events),
            PileId::Pin(index) => self.play_pin(index, card, &mut events),
        };

        if frame_over {
            events.extend(self.next_frame());
        }
        events.extend(self.draw_next());

        Ok(events)
    }

    /// Adds a card to a ball and throws it once full. Returns whether the
    /// frame is over.
    fn play_ball(&mut self, index: usize, card: Card, events: &mut Vec<Event>) -> bool {
        let ball = &mut self.balls[index];
        ball.add(card);

        if ball.size() != usize::from(self.options.ball_capacity) {
            return false;
        }

        events.push(Event::Score(ScoreEvent {
            ball: index,
            points: self.filled_pins(),
        }));
        index == BALL_COUNT - 1
    }

    /// Adds a card to a pin and checks for a strike or spare. Returns whether
    /// the frame is over.
    fn play_pin(&mut self, index: usize, card: Card, events: &mut Vec<Event>) -> bool {
        self.pins[index].add(card);

        if self.filled_pins() != PIN_COUNT {
            return false;
        }

        let capacity = usize::from(self.options.ball_capacity);
        let first_ball_thrown = capacity > 0 && self.balls[0].size() >= capacity;
        let kind = if first_ball_thrown {
            FrameResultKind::Spare
        } else {
            FrameResultKind::Strike
        };
        events.push(Event::FrameResult(FrameResultEvent { kind }));
        true
    }
}
