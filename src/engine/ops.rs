use super::state::{Board, Direction, Tile, SIZE};

/// Result of sliding/merging a board in one direction.
///
/// `board` is the repacked grid, `gained` the score earned by merges in
/// this shift, and `moved` whether any slot changed. When `moved` is
/// false the caller must keep its original board untouched.
#[derive(Debug, Clone)]
pub struct ShiftOutcome {
    pub board: Board,
    pub gained: u64,
    pub moved: bool,
}

/// Slide/merge tiles in the given direction. Pure: no randomness, no
/// score mutation, input board untouched.
///
/// All four directions run the same line routine; a direction only
/// chooses which coordinates form a line and in what order the line is
/// walked (toward the edge the tiles move against).
///
/// Example
/// ```
/// use twenty48_core::engine::{shift, Board, Direction};
///
/// let b = Board::from_values([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// let out = shift(&b, Direction::Left);
/// assert!(out.moved);
/// assert_eq!(out.gained, 4);
/// assert_eq!(out.board.value_at(0, 0), 4);
/// ```
pub fn shift(board: &Board, direction: Direction) -> ShiftOutcome {
    let mut next = Board::EMPTY;
    let mut gained = 0u64;
    let mut moved = false;

    for line in line_coords(direction) {
        let before = line.map(|(row, col)| board.value_at(row, col));
        let (packed, line_gain) = compact_line(&before);
        gained += line_gain;

        for (&(row, col), &(value, just_merged)) in line.iter().zip(packed.iter()) {
            next.cells[row][col] = (value != 0).then_some(Tile {
                value,
                row,
                col,
                just_merged,
            });
        }
        // Positional value comparison; a change in any line marks the
        // whole shift as moved.
        if packed.iter().map(|&(v, _)| v).ne(before.iter().copied()) {
            moved = true;
        }
    }

    ShiftOutcome {
        board: next,
        gained,
        moved,
    }
}

/// True iff the board is full and no two adjacent tiles share a value.
///
/// One row-major scan checking right and down neighbours covers every
/// adjacent pair exactly once.
pub fn is_game_over(board: &Board) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let value = board.value_at(row, col);
            if value == 0 {
                return false;
            }
            if row + 1 < SIZE && board.value_at(row + 1, col) == value {
                return false;
            }
            if col + 1 < SIZE && board.value_at(row, col + 1) == value {
                return false;
            }
        }
    }
    true
}

/// The 4 lines a direction operates on, each as 4 coordinates ordered
/// from the edge tiles pack against toward the opposite edge.
fn line_coords(direction: Direction) -> [[(usize, usize); SIZE]; SIZE] {
    let mut lines = [[(0, 0); SIZE]; SIZE];
    for (li, line) in lines.iter_mut().enumerate() {
        for (ti, coord) in line.iter_mut().enumerate() {
            *coord = match direction {
                Direction::Left => (li, ti),
                Direction::Right => (li, SIZE - 1 - ti),
                Direction::Up => (ti, li),
                Direction::Down => (SIZE - 1 - ti, li),
            };
        }
    }
    lines
}

/// Compact one line toward index 0, merging equal neighbours.
///
/// Input is the raw line in walk order (zeros included). Output is the
/// packed line as `(value, just_merged)` pairs plus the score gained.
/// A pair merges only if neither side was itself produced by a merge in
/// this pass, so `[2, 2, 2, 2]` becomes `[4, 4]` and never `[8]`.
fn compact_line(line: &[u32; SIZE]) -> ([(u32, bool); SIZE], u64) {
    let mut seq: Vec<(u32, bool)> = line
        .iter()
        .filter(|&&v| v != 0)
        .map(|&v| (v, false))
        .collect();

    let mut gained = 0u64;
    let mut i = 0;
    while i + 1 < seq.len() {
        let (a, a_merged) = seq[i];
        let (b, b_merged) = seq[i + 1];
        if a == b && !a_merged && !b_merged {
            seq[i] = (a * 2, true);
            seq.remove(i + 1);
            gained += (a * 2) as u64;
            // Re-check the same index; the merged flag blocks this
            // result from merging again.
        } else {
            i += 1;
        }
    }

    let mut packed = [(0u32, false); SIZE];
    for (slot, pair) in packed.iter_mut().zip(seq) {
        *slot = pair;
    }
    (packed, gained)
}
