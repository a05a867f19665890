use super::{win, Board, Player};

/// Where a game stands. `Won` and `Draw` are terminal: no further moves are
/// accepted until [`GameSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    GameOver,
}

/// One game of Connect Four: board, whose turn it is, and the outcome.
///
/// All turn and outcome logic lives here; the UI only translates input into
/// column indices and renders whatever state it reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: Status,
}

impl GameSession {
    /// Start a fresh game. Black moves first.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_player: Player::Black,
            status: Status::InProgress,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get game status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Drop the current player's token in `column` and advance the game.
    ///
    /// On success returns the row the token landed in. On a full column the
    /// board is untouched and the turn does not pass; the caller picks
    /// another column. A move that completes a four-in-a-row wins even when
    /// it also fills the board: the win check runs before the draw check.
    pub fn play(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_token(column, self.current_player.to_cell())
            .map_err(|_| MoveError::ColumnFull)?;

        if win::connect_four(&self.board) {
            self.status = Status::Won(self.current_player);
        } else if self.board.is_full() {
            self.status = Status::Draw;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }

    /// Start a new game: empty board, Black to move.
    pub fn reset(&mut self) {
        *self = GameSession::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
