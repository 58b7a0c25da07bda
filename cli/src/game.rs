use std::io::BufRead;

use flipmine_core::{GameStatus, Session};

use crate::input::{Input, parse_line, read_line};
use crate::render::Renderer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Finished(GameStatus),
    Quit,
}

/// Runs one session until it is won, lost, or the player leaves.
pub fn play(
    session: &mut Session,
    input: &mut impl BufRead,
    renderer: &mut impl Renderer,
) -> anyhow::Result<GameEnd> {
    while !session.is_finished() {
        renderer.draw(&session.snapshot())?;

        let Some(line) = read_line(input)? else {
            return Ok(GameEnd::Quit);
        };
        let command = match parse_line(&line, session.board().size()) {
            Ok(Input::Command(command)) => command,
            Ok(Input::Quit) => return Ok(GameEnd::Quit),
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line, err);
                renderer.draw_command_error(&err)?;
                continue;
            }
        };

        match session.apply(command) {
            Ok(outcome) => log::debug!("{:?} -> {:?}", command, outcome),
            Err(err) => {
                log::warn!("Command {:?} failed: {}", command, err);
                renderer.draw_command_error(&err)?;
            }
        }
    }

    let status = session.status();
    log::info!(
        "Game ended {:?} after {} moves, score {}",
        status,
        session.move_count(),
        session.score()
    );
    renderer.draw_result(status)?;
    Ok(GameEnd::Finished(status))
}

pub fn ask_restart(input: &mut impl BufRead, renderer: &mut impl Renderer) -> anyhow::Result<bool> {
    renderer.draw_new_game()?;
    let answer = read_line(input)?;
    Ok(answer.is_some_and(|answer| {
        let answer = answer.trim();
        answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
    }))
}
