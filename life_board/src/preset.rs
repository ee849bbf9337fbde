use crate::{Board, BoardError, BoardObserver};

/// Named starting configurations. The board itself knows nothing about
/// them; a preset is just data applied through the board's public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every cell on the outer edge of the field.
    Border,
    /// Both diagonals of the field.
    BigX,
    /// A glider in the top-left corner, walking towards the bottom-right.
    Glider,
    /// A small symmetric explosion seed around (11, 11).
    Exploder,
}

const GLIDER_CELLS: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

const EXPLODER_CELLS: &[(usize, usize)] = &[
    (9, 9),
    (10, 9),
    (11, 9),
    (12, 9),
    (13, 9),
    (9, 11),
    (13, 11),
    (9, 13),
    (10, 13),
    (11, 13),
    (12, 13),
    (13, 13),
];

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Border, Preset::BigX, Preset::Glider, Preset::Exploder];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Border => "Border",
            Preset::BigX => "Big X",
            Preset::Glider => "Glider",
            Preset::Exploder => "Exploder",
        }
    }

    /// Clears the board, then marks the preset's cells alive.
    ///
    /// A preset coordinate outside the field aborts with an error instead
    /// of being clamped; the board is left cleared with the cells applied
    /// so far, and the caller decides what to do about the mismatch.
    pub fn apply<O: BoardObserver>(self, board: &mut Board<O>) -> Result<(), BoardError> {
        board.clear();
        let side = board.side();
        match self {
            Preset::Border => {
                for x in 0..side {
                    for y in 0..side {
                        if x == 0 || x + 1 == side || y == 0 || y + 1 == side {
                            board.set_cell(x, y, true)?;
                        }
                    }
                }
            }
            Preset::BigX => {
                for x in 0..side {
                    for y in 0..side {
                        if x == y || x + y + 1 == side {
                            board.set_cell(x, y, true)?;
                        }
                    }
                }
            }
            Preset::Glider => {
                for &(x, y) in GLIDER_CELLS {
                    board.set_cell(x, y, true)?;
                }
            }
            Preset::Exploder => {
                for &(x, y) in EXPLODER_CELLS {
                    board.set_cell(x, y, true)?;
                }
            }
        }
        Ok(())
    }
}
