//! twenty48-core: the 2048 rules engine as an embeddable library
//!
//! This crate provides:
//! - A `Board` type over an explicit 4x4 grid of tiles, with the
//!   slide/merge transformation for all four directions (`engine::shift`)
//! - Tile spawning behind an injectable `Spawner` so games replay
//!   deterministically under test
//! - A `Game` session driver with score accounting, game-over detection,
//!   and renderer-facing snapshots
//!
//! There is no UI here: rendering and input mapping belong to whatever
//! thin shell embeds the engine, which only needs `Game::make_move` and
//! `Game::snapshot`.
//!
//! Quick start:
//! ```
//! use twenty48_core::{Direction, Game, RngSpawner};
//!
//! // Deterministic game via a seeded spawner
//! let mut spawner = RngSpawner::seeded(42);
//! let mut game = Game::new(&mut spawner);
//!
//! // Drive a few moves; blocked directions are no-ops
//! for dir in [Direction::Left, Direction::Up, Direction::Right] {
//!     let _moved = game.make_move(dir, &mut spawner);
//! }
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, game.score());
//! ```
//!
//! The pure transformation is available directly when no session state
//! is wanted:
//! ```
//! use twenty48_core::engine::{shift, Board, Direction};
//!
//! let board = Board::from_values([
//!     [4, 2, 2, 4],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]);
//! let out = shift(&board, Direction::Right);
//! assert_eq!(out.board.to_values()[0], [0, 4, 4, 4]);
//! assert_eq!(out.gained, 4);
//! ```

pub mod engine;
pub mod game;

pub use engine::{Board, Cell, Direction, RngSpawner, Spawner, Tile, SIZE};
pub use game::{Game, Snapshot};
