//! Core Connect Four game logic: board representation, gravity drops,
//! last-move win detection, and the game state machine.

mod board;
mod player;
mod session;
mod win;

pub use board::{Board, Cell, ColumnFull, COLS, ROWS};
pub use player::Player;
pub use session::{GameSession, MoveError, Status};
pub use win::connect_four;
