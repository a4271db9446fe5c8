//! Engine module: the 4x4 board, slide/merge ops, and tile spawning.
//!
//! - `Board` is the explicit 4x4 grid of cells with useful methods.
//! - `ops` holds the pure shift/merge routine shared by all four
//!   directions plus the game-over scan.
//! - `spawn` isolates the one source of randomness behind the `Spawner`
//!   trait so games replay deterministically under test.

mod ops;
mod spawn;
pub mod state;

pub use state::{Board, Cell, Direction, Tile, SIZE};

pub use ops::{is_game_over, shift, ShiftOutcome};
pub use spawn::{spawn_tile, RngSpawner, Spawner};
