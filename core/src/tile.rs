use serde::{Deserialize, Serialize};

/// What the player currently sees of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Hidden and Flagged swap, Revealed has no flag transition.
    pub const fn toggle_flag(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Flagged),
            Self::Flagged => Some(Self::Hidden),
            Self::Revealed => None,
        }
    }

    /// Revealed is terminal, so revealing twice is not a transition.
    pub const fn reveal(self) -> Option<Self> {
        match self {
            Self::Hidden | Self::Flagged => Some(Self::Revealed),
            Self::Revealed => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    is_mine: bool,
    adjacent_mines: u8,
    visibility: Visibility,
}

impl Tile {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn place_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn increment_adjacency(&mut self) {
        self.adjacent_mines += 1;
    }

    /// Unconditional overwrite, legality is checked by the board.
    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}
