use std::fmt::Display;
use std::io::{self, Write};

use flipmine_core::{GameStatus, SessionSnapshot, TileView, Visibility};

/// Everything the game loop shows to the player goes through here.
pub trait Renderer {
    fn draw(&mut self, snapshot: &SessionSnapshot) -> io::Result<()>;
    fn draw_result(&mut self, status: GameStatus) -> io::Result<()>;
    fn draw_command_error(&mut self, error: &dyn Display) -> io::Result<()>;
    fn draw_setup_error(&mut self, error: &dyn Display) -> io::Result<()>;
    fn draw_prompt(&mut self, message: &str) -> io::Result<()>;
    fn draw_new_game(&mut self) -> io::Result<()>;
}

pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_header(&mut self, snapshot: &SessionSnapshot) -> io::Result<()> {
        let (width, height) = snapshot.board.size();
        write!(self.out, "Size {width} x {height}")?;
        if snapshot.cheat_active {
            write!(self.out, " | Cheat mode on")?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Mines: {}", snapshot.board.total_mines())
    }

    fn draw_ruler(&mut self, width: u8) -> io::Result<()> {
        write!(self.out, " Y\\X ")?;
        for x in 1..=width {
            write!(self.out, "{}", label(x))?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn draw(&mut self, snapshot: &SessionSnapshot) -> io::Result<()> {
        writeln!(self.out)?;
        self.draw_header(snapshot)?;
        self.draw_ruler(snapshot.board.size().0)?;

        for (y, row) in (1..).zip(snapshot.board.rows()) {
            write!(self.out, "{}", label(y))?;
            for tile in row {
                write!(self.out, "{}", glyph(tile))?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out)?;

        writeln!(
            self.out,
            "# Enter a command and coordinates (F - reveal tile | R - toggle flag)"
        )?;
        writeln!(self.out, "ex) F 3 5")?;
        write!(self.out, "> ")?;
        self.out.flush()
    }

    fn draw_result(&mut self, status: GameStatus) -> io::Result<()> {
        match status {
            GameStatus::Lost => writeln!(self.out, "A mine exploded. Game over."),
            GameStatus::Won => writeln!(self.out, "All mines found. Victory!!"),
            GameStatus::InProgress => Ok(()),
        }
    }

    fn draw_command_error(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "Invalid command: {error}")
    }

    fn draw_setup_error(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "Invalid value: {error}")
    }

    fn draw_prompt(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "{message}")?;
        self.out.flush()
    }

    fn draw_new_game(&mut self) -> io::Result<()> {
        write!(self.out, "Start a new game? (Yes / No) ")?;
        self.out.flush()
    }
}

fn label(n: u8) -> String {
    if n < 10 {
        format!("  {n}. ")
    } else {
        format!(" {n}. ")
    }
}

fn glyph(tile: &TileView) -> String {
    if let Some(is_mine) = tile.mine {
        return if is_mine {
            "  *  ".to_string()
        } else {
            number(tile.adjacent_mines)
        };
    }

    match tile.visibility {
        Visibility::Hidden => "[   ]".to_string(),
        Visibility::Flagged => "[ ? ]".to_string(),
        Visibility::Revealed => number(tile.adjacent_mines),
    }
}

fn number(count: u8) -> String {
    if count == 0 {
        "     ".to_string()
    } else {
        format!("  {count}  ")
    }
}
