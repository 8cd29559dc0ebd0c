//! Connect Four board with gravity

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{Cell, GameBoard, GameKind, Placement, Player, Verdict, board::parse_cells},
};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Marks in a row needed to win
pub const CONNECT: usize = 4;

/// Center column first, spreading outwards
const PREFERRED_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Row/column steps for horizontal, vertical, `\` and `/` lines
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Every length-4 window on the board as flat cell indices.
///
/// Rows first, then columns, then `\` diagonals, then `/` diagonals.
pub fn windows() -> impl Iterator<Item = [usize; CONNECT]> {
    DIRECTIONS.into_iter().flat_map(|(dr, dc)| {
        (0..ROWS).flat_map(move |row| {
            (0..COLS).filter_map(move |col| {
                let mut window = [0; CONNECT];
                for (step, slot) in window.iter_mut().enumerate() {
                    let r = row as isize + dr * step as isize;
                    let c = col as isize + dc * step as isize;
                    if !(0..ROWS as isize).contains(&r) || !(0..COLS as isize).contains(&c) {
                        return None;
                    }
                    *slot = index(r as usize, c as usize);
                }
                Some(window)
            })
        })
    })
}

fn index(row: usize, col: usize) -> usize {
    row * COLS + col
}

/// 6x7 board, row 0 is the top and row 5 the bottom.
///
/// A move names a column; the mark lands in the lowest empty row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFourBoard {
    #[serde(with = "cells_serde")]
    cells: [Cell; ROWS * COLS],
}

impl ConnectFourBoard {
    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[index(row, col)]
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Row the next mark in `col` would land in
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Row of the top-most mark in `col`
    fn top_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.get(row, col) != Cell::Empty)
    }

    /// Contiguous run through (row, col) along one direction, both ways
    fn run_length(&self, row: usize, col: usize, (dr, dc): (isize, isize), cell: Cell) -> usize {
        let mut count = 1;
        for sign in [-1, 1] {
            let mut r = row as isize + dr * sign;
            let mut c = col as isize + dc * sign;
            while (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.get(r as usize, c as usize) == cell
            {
                count += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }
        count
    }

    /// Check if the mark at (row, col) is part of four in a row
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&direction| self.run_length(row, col, direction, cell) >= CONNECT)
    }
}

impl Default for ConnectFourBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoard for ConnectFourBoard {
    const KIND: GameKind = GameKind::ConnectFour;
    const ACTIONS: usize = COLS;
    const CELLS: usize = ROWS * COLS;

    fn new() -> Self {
        Self {
            cells: [Cell::Empty; ROWS * COLS],
        }
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn is_legal(&self, mv: usize) -> bool {
        !self.is_column_full(mv)
    }

    fn apply(&mut self, mv: usize, player: Player) -> Result<Placement> {
        if mv >= COLS {
            return Err(Error::illegal_move(mv, "column is off the board"));
        }
        let row = self
            .landing_row(mv)
            .ok_or_else(|| Error::illegal_move(mv, "column is full"))?;
        let cell = index(row, mv);
        self.cells[cell] = player.to_cell();
        Ok(Placement {
            cell,
            row,
            col: mv,
            player,
        })
    }

    fn undo(&mut self, mv: usize) -> Result<()> {
        let row = self
            .top_row(mv)
            .ok_or_else(|| Error::invariant(format!("undo of column {mv} with no mark")))?;
        self.cells[index(row, mv)] = Cell::Empty;
        Ok(())
    }

    fn has_won(&self, player: Player) -> bool {
        let target = player.to_cell();
        windows().any(|window| window.iter().all(|&i| self.cells[i] == target))
    }

    fn verdict_after(&self, placement: &Placement) -> Verdict {
        if self.check_win(placement.row, placement.col) {
            Verdict::Win(placement.player)
        } else if self.is_full() {
            Verdict::Draw
        } else {
            Verdict::Ongoing
        }
    }

    fn preferred_order(&self) -> &'static [usize] {
        &PREFERRED_ORDER
    }

    fn swap_players(&self) -> Self {
        Self {
            cells: self.cells.map(Cell::swapped),
        }
    }
}

impl FromStr for ConnectFourBoard {
    type Err = Error;

    /// Parse 42 `.XO` characters, top row first.
    ///
    /// Marks must rest on the bottom or on another mark.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = parse_cells(s, Self::CELLS)?;
        let mut cells = [Cell::Empty; ROWS * COLS];
        cells.copy_from_slice(&parsed);
        let board = Self { cells };

        for row in 0..ROWS - 1 {
            for col in 0..COLS {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(Error::InvalidBoard {
                        input: s.to_string(),
                        reason: format!("floating mark at row {row}, column {col}"),
                    });
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for ConnectFourBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                write!(f, "{}", self.get(row, col).to_char())?;
            }
            if row + 1 < ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// serde only derives arrays up to 32 elements
mod cells_serde {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::{COLS, ROWS};
    use crate::game::Cell;

    pub fn serialize<S: Serializer>(cells: &[Cell; ROWS * COLS], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(cells.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[Cell; ROWS * COLS], D::Error> {
        let cells = Vec::<Cell>::deserialize(d)?;
        let len = cells.len();
        cells
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"42 cells"))
    }
}
