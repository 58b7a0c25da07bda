use std::io::BufRead;
use std::ops::RangeInclusive;

use flipmine_core::{CellCount, Coord, Coord2, GameConfig, mult};
use thiserror::Error;

use crate::input::read_line;
use crate::render::Renderer;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("{value} is outside the allowed range {min} to {max}")]
    OutOfRange { value: u32, min: u32, max: u32 },
}

/// Values given on the command line, anything missing is asked for.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Preset {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
}

const DIMENSIONS: RangeInclusive<u32> = 1..=Coord::MAX as u32;

/// At least one mine, and at least one safe tile whenever the board has room for it.
pub fn mine_count_range((width, height): Coord2) -> RangeInclusive<CellCount> {
    let max = mult(width, height).saturating_sub(1).max(1);
    1..=max
}

pub fn parse_dimension(line: &str) -> Result<Coord, SetupError> {
    // within `Coord` after the range check
    parse_in_range(line, DIMENSIONS).map(|value| value as Coord)
}

pub fn parse_mine_count(line: &str, size: Coord2) -> Result<CellCount, SetupError> {
    let range = mine_count_range(size);
    let range = u32::from(*range.start())..=u32::from(*range.end());
    parse_in_range(line, range).map(|value| value as CellCount)
}

fn parse_in_range(line: &str, range: RangeInclusive<u32>) -> Result<u32, SetupError> {
    let line = line.trim();
    let value: u32 = line
        .parse()
        .map_err(|_| SetupError::NotANumber(line.to_string()))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(SetupError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Collects the board size and mine count, `None` when the input ends first.
pub fn read_config(
    preset: &Preset,
    input: &mut impl BufRead,
    renderer: &mut impl Renderer,
) -> anyhow::Result<Option<GameConfig>> {
    let width = match preset.width {
        Some(width) => width,
        None => match prompt(input, renderer, "# Board width (X): ", parse_dimension)? {
            Some(width) => width,
            None => return Ok(None),
        },
    };
    let height = match preset.height {
        Some(height) => height,
        None => match prompt(input, renderer, "# Board height (Y): ", parse_dimension)? {
            Some(height) => height,
            None => return Ok(None),
        },
    };
    let size = (width, height);

    let preset_mines = preset.mines.filter(|mines| {
        let valid = mine_count_range(size).contains(mines);
        if !valid {
            log::warn!("Ignoring preset mine count {} for a {}x{} board", mines, width, height);
        }
        valid
    });
    let mines = match preset_mines {
        Some(mines) => mines,
        None => {
            let range = mine_count_range(size);
            let message = format!("# Number of mines ({} to {}): ", range.start(), range.end());
            match prompt(input, renderer, &message, |line| parse_mine_count(line, size))? {
                Some(mines) => mines,
                None => return Ok(None),
            }
        }
    };

    let config = GameConfig::new(size, mines)?;
    log::debug!("Setup complete: {:?}", config);
    Ok(Some(config))
}

fn prompt<T>(
    input: &mut impl BufRead,
    renderer: &mut impl Renderer,
    message: &str,
    parse: impl Fn(&str) -> Result<T, SetupError>,
) -> anyhow::Result<Option<T>> {
    loop {
        renderer.draw_prompt(message)?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => renderer.draw_setup_error(&err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ConsoleRenderer;

    fn read(preset: Preset, script: &str) -> (Option<GameConfig>, String) {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        let config = read_config(&preset, &mut script.as_bytes(), &mut renderer).unwrap();
        (config, String::from_utf8(renderer.into_inner()).unwrap())
    }

    #[test]
    fn mine_range_keeps_a_safe_tile() {
        assert_eq!(mine_count_range((3, 3)), 1..=8);
        assert_eq!(mine_count_range((5, 2)), 1..=9);
        assert_eq!(mine_count_range((1, 1)), 1..=1);
    }

    #[test]
    fn parses_dimensions() {
        assert_eq!(parse_dimension(" 9 "), Ok(9));
        assert_eq!(
            parse_dimension("0"),
            Err(SetupError::OutOfRange {
                value: 0,
                min: 1,
                max: 255
            })
        );
        assert_eq!(
            parse_dimension("256"),
            Err(SetupError::OutOfRange {
                value: 256,
                min: 1,
                max: 255
            })
        );
        assert_eq!(
            parse_dimension("nine"),
            Err(SetupError::NotANumber("nine".into()))
        );
    }

    #[test]
    fn rectangular_boards_use_their_area() {
        // the width squared would only allow 3 mines here
        assert_eq!(parse_mine_count("7", (2, 4)), Ok(7));
        assert_eq!(
            parse_mine_count("8", (2, 4)),
            Err(SetupError::OutOfRange {
                value: 8,
                min: 1,
                max: 7
            })
        );
    }

    #[test]
    fn prompts_until_valid() {
        let (config, output) = read(Preset::default(), "abc\n4\n0\n3\n12\n2\n");

        assert_eq!(config, Some(GameConfig::new_unchecked((4, 3), 2)));
        assert_eq!(output.matches("Invalid value").count(), 3);
        assert!(output.contains("# Number of mines (1 to 11): "));
    }

    #[test]
    fn preset_skips_prompts() {
        let preset = Preset {
            width: Some(9),
            height: Some(9),
            mines: Some(10),
        };
        let (config, output) = read(preset, "");

        assert_eq!(config, Some(GameConfig::new_unchecked((9, 9), 10)));
        assert!(output.is_empty());
    }

    #[test]
    fn invalid_preset_mines_are_asked_again() {
        let preset = Preset {
            width: Some(2),
            height: Some(2),
            mines: Some(4),
        };
        let (config, _) = read(preset, "3\n");

        assert_eq!(config, Some(GameConfig::new_unchecked((2, 2), 3)));
    }

    #[test]
    fn end_of_input_cancels() {
        let (config, _) = read(Preset::default(), "5\n");
        assert_eq!(config, None);
    }
}
