//! CLI bowling solitaire example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bowlrs::{
    Card, Event, FrameResultKind, Game, GameOptions, GameState, Pile, PileId, Suit,
};

fn main() {
    println!("Bowling solitaire CLI example (type 'q' to quit)");
    println!("Play the drawn card with p0-p9 (pins) or b0-b1 (balls).");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    print_events(&game.start_game());

    loop {
        match game.state() {
            GameState::AwaitingPlay => {}
            GameState::DeckExhausted => {
                println!("The deck is empty. Game over.");
                break;
            }
            GameState::Stalled | GameState::AwaitingDraw => {
                print_events(&game.start_game());
                continue;
            }
        }

        print_table(&game);

        let input = prompt_line("Pile: ");
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            break;
        }

        let Some(pile) = parse_pile(&input) else {
            println!("Unknown pile.");
            continue;
        };

        match game.play(pile) {
            Ok(events) => print_events(&events),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    read_choice(&mut io::stdin().lock())
}

/// Reads one command; end of input or a read error quits.
fn read_choice<R: BufRead>(reader: &mut R) -> String {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn parse_pile(input: &str) -> Option<PileId> {
    let (kind, index) = input.split_at_checked(1)?;
    let index = index.parse::<usize>().ok()?;
    match kind {
        "p" => Some(PileId::Pin(index)),
        "b" => Some(PileId::Ball(index)),
        _ => None,
    }
}

fn print_events(events: &[Event]) {
    for event in events {
        match event {
            Event::FrameStarted { frame } => println!("\n=== Frame {frame} ==="),
            Event::Score(score) => {
                println!("Ball {} thrown: scored {} points!", score.ball, score.points);
            }
            Event::FrameResult(result) => match result.kind {
                FrameResultKind::Strike => println!("{}", colorize("Strike!", "33")),
                FrameResultKind::Spare => println!("{}", colorize("Spare!", "33")),
            },
            Event::Stalled(card) => println!("{card} cannot be played anywhere."),
            Event::DeckExhausted => println!("No cards left to draw."),
            Event::CardDrawn(_) | Event::CardPlayed { .. } => {}
        }
    }
}

fn print_table(game: &Game) {
    let legal = game.legal_targets();

    // Back row first; pin 0 is the head pin.
    let rows: [&[usize]; 4] = [&[6, 7, 8, 9], &[3, 4, 5], &[1, 2], &[0]];
    println!();
    for (depth, row) in rows.iter().enumerate() {
        let indent = " ".repeat(depth * 3);
        let cells: Vec<String> = row
            .iter()
            .map(|&index| format_pile(&game.pins()[index], PileId::Pin(index), &legal))
            .collect();
        println!("{indent}{}", cells.join(" "));
    }

    let balls: Vec<String> = game
        .balls()
        .iter()
        .enumerate()
        .map(|(index, ball)| {
            let cell = format_pile(ball, PileId::Ball(index), &legal);
            format!("{cell} x{}", ball.size())
        })
        .collect();
    println!("\nBalls: {}", balls.join("  "));

    if let Some(card) = game.active_card() {
        println!(
            "Deck: {} cards | Drawn: {} ({card})",
            game.cards_remaining(),
            format_card(&card)
        );
    }
}

fn format_pile(pile: &Pile, id: PileId, legal: &[PileId]) -> String {
    let label = match id {
        PileId::Pin(index) => format!("p{index}"),
        PileId::Ball(index) => format!("b{index}"),
    };
    let face = pile.top().map_or_else(|| "--".to_string(), format_card);
    let text = format!("[{label}:{face}]");
    if legal.contains(&id) {
        colorize(&text, "32")
    } else {
        text
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.label(), color_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_quits() {
        assert_eq!(read_choice(&mut io::empty()), "q");
    }

    #[test]
    fn commands_are_trimmed_and_parsed() {
        let mut input = io::Cursor::new("  P3\nb1\n");
        assert_eq!(read_choice(&mut input), "p3");
        assert_eq!(read_choice(&mut input), "b1");
        assert_eq!(read_choice(&mut input), "q");

        assert_eq!(parse_pile("p3"), Some(PileId::Pin(3)));
        assert_eq!(parse_pile("b1"), Some(PileId::Ball(1)));
        assert_eq!(parse_pile(""), None);
    }
}
