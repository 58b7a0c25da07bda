use std::io::{self, BufRead};

use flipmine_core::{Command, Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Please enter a command")]
    Empty,
    #[error("Unknown command `{0}`, use F x y, R x y, ShowMine or HideMine")]
    UnknownCommand(String),
    #[error("`{0}` needs two coordinates, e.g. `{0} 3 5`")]
    MissingCoordinates(String),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoordinate(String),
    #[error("Unexpected `{0}` after the command")]
    TrailingInput(String),
    #[error("({x}, {y}) is outside the {width}x{height} board, coordinates start at 1")]
    OutOfBoard {
        x: u32,
        y: u32,
        width: Coord,
        height: Coord,
    },
}

/// Parses one line typed by the player, translating 1-based coordinates to 0-based ones.
pub fn parse_line(line: &str, size: Coord2) -> Result<Input, ParseError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(ParseError::Empty);
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "f" | "reveal" => {
            let (x, y) = parse_coords(verb, &mut words, size)?;
            Input::Command(Command::Reveal { x, y })
        }
        "r" | "flag" => {
            let (x, y) = parse_coords(verb, &mut words, size)?;
            Input::Command(Command::ToggleFlag { x, y })
        }
        "showmine" => Input::Command(Command::SetCheat(true)),
        "hidemine" => Input::Command(Command::SetCheat(false)),
        "q" | "quit" => Input::Quit,
        _ => return Err(ParseError::UnknownCommand(verb.to_string())),
    };

    if let Some(extra) = words.next() {
        return Err(ParseError::TrailingInput(extra.to_string()));
    }
    Ok(input)
}

/// Reads one line without its line ending, `None` once the input is exhausted.
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    line.truncate(line.trim_end_matches(['\r', '\n']).len());
    Ok(Some(line))
}

fn parse_coords<'a>(
    verb: &str,
    words: &mut impl Iterator<Item = &'a str>,
    (width, height): Coord2,
) -> Result<Coord2, ParseError> {
    let (Some(x), Some(y)) = (words.next(), words.next()) else {
        return Err(ParseError::MissingCoordinates(verb.to_string()));
    };
    let x = parse_number(x)?;
    let y = parse_number(y)?;

    if x == 0 || y == 0 || x > u32::from(width) || y > u32::from(height) {
        return Err(ParseError::OutOfBoard {
            x,
            y,
            width,
            height,
        });
    }
    // both fit `Coord` after the bounds check
    Ok(((x - 1) as Coord, (y - 1) as Coord))
}

fn parse_number(word: &str) -> Result<u32, ParseError> {
    word.parse()
        .map_err(|_| ParseError::InvalidCoordinate(word.to_string()))
}
