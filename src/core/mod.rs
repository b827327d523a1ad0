//! Core game logic: the board, the redistribution loop, the occupancy tally.

pub mod game;
pub mod grid;
pub mod tally;
