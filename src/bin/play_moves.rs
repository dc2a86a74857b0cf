use std::env;
use std::process::ExitCode;

use chess_rules::{GameState, Square};

/// Parse a `ff-tt` move of file/rank digit pairs, e.g. `46-44`.
fn parse_move(arg: &str) -> Option<(Square, Square)> {
    let (from, to) = arg.split_once('-')?;
    Some((parse_square(from)?, parse_square(to)?))
}

fn parse_square(text: &str) -> Option<Square> {
    let mut digits = text.chars().map(|c| c.to_digit(10));
    match (digits.next(), digits.next(), digits.next()) {
        (Some(Some(file)), Some(Some(rank)), None) => Square::new(file as usize, rank as usize),
        _ => None,
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: play_moves <from-to> <from-to> ...   (e.g. 46-44 41-43)");
        return ExitCode::FAILURE;
    }

    let mut game = GameState::new();
    for arg in args.iter().skip(1) {
        let Some((from, to)) = parse_move(arg) else {
            eprintln!("bad move '{arg}': expected two file/rank digit pairs like 46-44");
            return ExitCode::FAILURE;
        };
        match game.try_apply(from, to) {
            Ok(mv) => println!("{mv}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!();
    println!("{}", game.snapshot());
    println!("legal_moves: {}", game.legal_moves().len());
    ExitCode::SUCCESS
}
