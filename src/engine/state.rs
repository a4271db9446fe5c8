use std::fmt;

use serde::{Deserialize, Serialize};

/// Board side length. The rules generalize to any N but 4x4 is the
/// reference game and the only size this crate ships.
pub const SIZE: usize = 4;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, handy for probing legal moves.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A single numbered tile sitting in a board slot.
///
/// `value` is always a power of two >= 2. `row`/`col` cache the slot the
/// tile occupies; the slot itself is the source of truth and the cache is
/// refreshed on every committed move. `just_merged` is set only on tiles
/// produced by a merge during the most recent committed move, so a
/// renderer can highlight them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub value: u32,
    pub row: usize,
    pub col: usize,
    pub just_merged: bool,
}

/// A board slot: empty or holding one tile.
pub type Cell = Option<Tile>;

/// The 4x4 grid of cells, row-major.
///
/// `Board` is a plain value: shifting produces a new board and never
/// mutates the input, which keeps `move` atomic for callers.
///
/// Example
/// ```
/// use twenty48_core::engine::Board;
///
/// let b = Board::from_values([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// assert_eq!(b.count_empty(), 14);
/// assert_eq!(b.highest_tile(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    pub(crate) cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// A constant empty board (16 empty slots).
    pub const EMPTY: Board = Board {
        cells: [[None; SIZE]; SIZE],
    };

    /// Build a board from a value grid; 0 means empty.
    ///
    /// Intended for tests and fixtures. Panics if a non-zero value is not
    /// a power of two >= 2.
    pub fn from_values(values: [[u32; SIZE]; SIZE]) -> Self {
        let mut board = Board::EMPTY;
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                assert!(
                    value >= 2 && value.is_power_of_two(),
                    "tile value must be a power of two >= 2, got {value}"
                );
                board.cells[row][col] = Some(Tile {
                    value,
                    row,
                    col,
                    just_merged: false,
                });
            }
        }
        board
    }

    /// The value grid, 0 for empty slots.
    pub fn to_values(&self) -> [[u32; SIZE]; SIZE] {
        let mut values = [[0u32; SIZE]; SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                values[row][col] = cell.map_or(0, |t| t.value);
            }
        }
        values
    }

    /// The cell at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The tile value at `(row, col)`, 0 if the slot is empty.
    #[inline]
    pub fn value_at(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col].map_or(0, |t| t.value)
    }

    /// Coordinates of all empty slots in row-major order.
    pub fn empty_slots(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].is_none() {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    /// Count the number of empty slots.
    pub fn count_empty(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Iterate over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    /// The highest tile value present, 0 on an empty board.
    pub fn highest_tile(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Sum of all tile values. Each committed move changes this by
    /// exactly the spawned tile's value (merges are conserving).
    pub fn total_value(&self) -> u64 {
        self.tiles().map(|t| t.value as u64).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.to_values();
        for (row, line) in values.iter().enumerate() {
            if row > 0 {
                writeln!(f, "--------------------------------")?;
            }
            let rendered: Vec<String> = line.iter().map(|&v| format_val(v)).collect();
            writeln!(f, "{}", rendered.join("|"))?;
        }
        Ok(())
    }
}

pub(crate) fn format_val(val: u32) -> String {
    match val {
        0 => String::from("       "),
        x => {
            let mut x = x.to_string();
            while x.len() < 7 {
                match x.len() {
                    6 => x = format!(" {}", x),
                    _ => x = format!(" {} ", x),
                }
            }
            x
        }
    }
}
