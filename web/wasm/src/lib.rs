use bowlrs::{
    Card, Event, FrameResultKind, Game, GameOptions, GameState, Pile, PileId, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn start_game(&mut self) -> Result<JsValue, JsValue> {
        let events = self.game.start_game();
        events_to_js(&events)
    }

    pub fn next_frame(&mut self) -> Result<JsValue, JsValue> {
        let mut events = self.game.next_frame();
        events.extend(self.game.draw_next());
        events_to_js(&events)
    }

    /// Plays the active card. `kind` is `"ball"` or `"pin"`.
    pub fn play(&mut self, kind: &str, index: u32) -> Result<JsValue, JsValue> {
        let id = pile_id(kind, index)?;
        let events = self.game.play(id).map_err(js_err)?;
        events_to_js(&events)
    }

    pub fn legal_targets(&self) -> Result<JsValue, JsValue> {
        let targets: Vec<JsPileId> = self
            .game
            .legal_targets()
            .into_iter()
            .map(JsPileId::from)
            .collect();
        to_js_value(&targets)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let legal = self.game.legal_targets();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            frame: self.game.frame(),
            active_card: self.game.active_card().map(card_to_js),
            cards_remaining: self.game.cards_remaining() as u32,
            balls: piles_to_js(self.game.balls(), PileId::Ball, &legal),
            pins: piles_to_js(self.game.pins(), PileId::Pin, &legal),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    frame: u32,
    active_card: Option<JsCard>,
    cards_remaining: u32,
    balls: Vec<JsPile>,
    pins: Vec<JsPile>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    name: String,
    label: String,
}

#[derive(Serialize)]
struct JsPile {
    index: u32,
    top: Option<JsCard>,
    size: u32,
    highlight: bool,
}

#[derive(Serialize)]
struct JsPileId {
    kind: &'static str,
    index: u32,
}

impl From<PileId> for JsPileId {
    fn from(id: PileId) -> Self {
        match id {
            PileId::Ball(index) => Self {
                kind: "ball",
                index: index as u32,
            },
            PileId::Pin(index) => Self {
                kind: "pin",
                index: index as u32,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsEvent {
    FrameStarted { frame: u32 },
    CardDrawn { card: JsCard },
    CardPlayed { card: JsCard, pile: JsPileId },
    Score { ball: u32, points: u32 },
    FrameResult { kind: &'static str },
    Stalled { card: JsCard },
    DeckExhausted,
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::FrameStarted { frame } => Self::FrameStarted { frame },
            Event::CardDrawn(card) => Self::CardDrawn {
                card: card_to_js(card),
            },
            Event::CardPlayed { card, pile } => Self::CardPlayed {
                card: card_to_js(card),
                pile: JsPileId::from(pile),
            },
            Event::Score(score) => Self::Score {
                ball: score.ball as u32,
                points: score.points as u32,
            },
            Event::FrameResult(result) => Self::FrameResult {
                kind: frame_result_to_str(result.kind),
            },
            Event::Stalled(card) => Self::Stalled {
                card: card_to_js(card),
            },
            Event::DeckExhausted => Self::DeckExhausted,
        }
    }
}

fn pile_id(kind: &str, index: u32) -> Result<PileId, JsValue> {
    let index = index as usize;
    match kind {
        "ball" => Ok(PileId::Ball(index)),
        "pin" => Ok(PileId::Pin(index)),
        _ => Err(JsValue::from_str("pile kind must be \"ball\" or \"pin\"")),
    }
}

fn piles_to_js(piles: &[Pile], id: fn(usize) -> PileId, legal: &[PileId]) -> Vec<JsPile> {
    piles
        .iter()
        .enumerate()
        .map(|(index, pile)| JsPile {
            index: index as u32,
            top: pile.top().copied().map(card_to_js),
            size: pile.size() as u32,
            highlight: legal.contains(&id(index)),
        })
        .collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit()),
        rank: card.rank(),
        name: card.to_string(),
        label: card.label(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    suit.name()
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::AwaitingDraw => "AwaitingDraw",
        GameState::AwaitingPlay => "AwaitingPlay",
        GameState::Stalled => "Stalled",
        GameState::DeckExhausted => "DeckExhausted",
    }
}

fn frame_result_to_str(kind: FrameResultKind) -> &'static str {
    match kind {
        FrameResultKind::Strike => "Strike",
        FrameResultKind::Spare => "Spare",
    }
}

fn events_to_js(events: &[Event]) -> Result<JsValue, JsValue> {
    let events: Vec<JsEvent> = events.iter().copied().map(JsEvent::from).collect();
    to_js_value(&events)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
