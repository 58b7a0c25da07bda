use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Running score, either the number of mines correctly flagged or a detonation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Score {
    Flags(CellCount),
    Detonated,
}

impl Score {
    /// Legacy integer form, `-1` marks a loss.
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Flags(count) => count as i32,
            Self::Detonated => -1,
        }
    }

    fn add_flag_delta(self, delta: i8) -> Self {
        match self {
            Self::Flags(count) => Self::Flags(count.saturating_add_signed(delta.into())),
            Self::Detonated => Self::Detonated,
        }
    }

    fn status(self, total_mines: CellCount) -> GameStatus {
        match self {
            Self::Detonated => GameStatus::Lost,
            Self::Flags(count) if count >= total_mines => GameStatus::Won,
            Self::Flags(_) => GameStatus::InProgress,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::Flags(0)
    }
}

/// A parsed player command, coordinates already zero based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal { x: Coord, y: Coord },
    ToggleFlag { x: Coord, y: Coord },
    SetCheat(bool),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Revealed(RevealOutcome),
    FlagToggled(i8),
    CheatChanged(bool),
}

/// One game: owns the board and turns board outcomes into score and status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    score: Score,
    status: GameStatus,
    cheat_active: bool,
    move_count: u32,
}

impl Session {
    pub fn new(board: Board) -> Self {
        let mut session = Self {
            board,
            score: Score::default(),
            status: GameStatus::default(),
            cheat_active: false,
            move_count: 0,
        };
        session.refresh_status();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn score(&self) -> i32 {
        self.score.as_i32()
    }

    pub fn cheat_active(&self) -> bool {
        self.cheat_active
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Reveal { x, y } => self.reveal((x, y)).map(CommandOutcome::Revealed),
            Command::ToggleFlag { x, y } => {
                self.toggle_flag((x, y)).map(CommandOutcome::FlagToggled)
            }
            Command::SetCheat(active) => {
                self.set_cheat(active);
                Ok(CommandOutcome::CheatChanged(active))
            }
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_active()?;
        let outcome = self.board.reveal(coords)?;

        self.cheat_active = false;
        self.move_count += 1;
        if outcome == RevealOutcome::Mine {
            self.score = Score::Detonated;
        }
        self.refresh_status();
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<i8> {
        self.check_active()?;
        let delta = self.board.toggle_flag(coords)?;

        self.cheat_active = false;
        self.move_count += 1;
        self.score = self.score.add_flag_delta(delta);
        self.refresh_status();
        Ok(delta)
    }

    /// Only changes what the renderer is allowed to see, also after the game ended.
    pub fn set_cheat(&mut self, active: bool) {
        self.cheat_active = active;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.snapshot(self.cheat_active),
            status: self.status,
            score: self.score(),
            cheat_active: self.cheat_active,
            move_count: self.move_count,
        }
    }

    fn refresh_status(&mut self) {
        let status = self.score.status(self.board.total_mines());
        if status != self.status {
            log::debug!("Game status {:?} -> {:?}", self.status, status);
        }
        self.status = status;
    }

    fn check_active(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
