use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::engine::{is_game_over, shift, spawn_tile, Board, Direction, Spawner, SIZE};

/// Read-only view of a game for renderers and wire shells: the value
/// grid (0 for empty), the score, and the terminal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: [[u32; SIZE]; SIZE],
    pub score: u64,
    pub over: bool,
}

/// One game session: the board, the running score, and the terminal
/// flag. Exactly one writer drives it through `make_move`; anything may
/// read it.
///
/// Example
/// ```
/// use twenty48_core::{Direction, Game, RngSpawner};
///
/// let mut spawner = RngSpawner::seeded(42);
/// let mut game = Game::new(&mut spawner);
/// assert_eq!(game.score(), 0);
/// assert_eq!(game.board().count_empty(), 14);
///
/// while !game.is_over() {
///     let before = game.score();
///     let mut acted = false;
///     for dir in Direction::ALL {
///         if game.make_move(dir, &mut spawner) {
///             acted = true;
///             break;
///         }
///     }
///     assert!(acted, "some direction must be legal until the game is over");
///     assert!(game.score() >= before);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: u64,
    over: bool,
}

impl Game {
    /// Start a session: empty board, two spawned tiles, score 0.
    pub fn new<S: Spawner + ?Sized>(spawner: &mut S) -> Self {
        let mut board = Board::EMPTY;
        spawn_tile(&mut board, spawner);
        spawn_tile(&mut board, spawner);
        Self {
            board,
            score: 0,
            over: false,
        }
    }

    /// Apply one move. Returns whether the board changed.
    ///
    /// A move that cannot change the board is a complete no-op: board
    /// kept slot for slot, score untouched, nothing spawned. Holding a
    /// blocked arrow key therefore never spawns tiles. When the board
    /// does change, the commit is atomic from the caller's perspective:
    /// new grid, score gain, one spawned tile, refreshed terminal flag.
    /// Once the session is over every further call returns false.
    pub fn make_move<S: Spawner + ?Sized>(&mut self, direction: Direction, spawner: &mut S) -> bool {
        if self.over {
            trace!("move {direction:?} ignored: session is over");
            return false;
        }
        let outcome = shift(&self.board, direction);
        if !outcome.moved {
            trace!("move {direction:?} ignored: board unchanged");
            return false;
        }
        self.board = outcome.board;
        self.score += outcome.gained;
        let spawned = spawn_tile(&mut self.board, spawner);
        self.over = is_game_over(&self.board);
        debug!(
            "move {direction:?}: +{} score={} spawned={spawned:?} over={}",
            outcome.gained, self.score, self.over
        );
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// True once no move can change the board. One-way: the session
    /// accepts no further mutation afterwards.
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.board.to_values(),
            score: self.score,
            over: self.over,
        }
    }
}
