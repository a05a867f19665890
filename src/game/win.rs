//! Last-move win detection.
//!
//! A four-in-a-row can only be completed by the token that was just placed,
//! so only runs passing through the board's recorded last move are examined.

use super::board::{Board, Cell, COLS, ROWS};

/// Run length required to win.
const CONNECT: usize = 4;

/// The four axes through a cell, each checked as a pair of opposite
/// directions: vertical, horizontal, diagonal `/`, diagonal `\`.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, -1), (1, 1)];

/// Check whether the most recent drop completed a four-in-a-row.
///
/// Returns false on a board with no recorded move.
pub fn connect_four(board: &Board) -> bool {
    let Some((row, col)) = board.last_move() else {
        return false;
    };
    let cell = board.get(row, col);
    if cell == Cell::Empty {
        return false;
    }

    // The pivot cell is counted by both halves of an axis, so one copy is
    // subtracted from the total.
    AXES.iter().any(|&(dr, dc)| {
        run_length(board, row, col, cell, dr, dc) + run_length(board, row, col, cell, -dr, -dc) - 1
            >= CONNECT
    })
}

/// Count consecutive cells matching `cell` starting at (row, col) and
/// stepping by (dr, dc), stopping at the board edge or a mismatch.
fn run_length(board: &Board, row: usize, col: usize, cell: Cell, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut r = row as isize;
    let mut c = col as isize;

    while (0..ROWS as isize).contains(&r)
        && (0..COLS as isize).contains(&c)
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += dr;
        c += dc;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_win() {
        assert!(!connect_four(&Board::new()));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_token(3, Cell::Black).unwrap();
        }
        assert!(connect_four(&board));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_token(col, Cell::Black).unwrap();
        }
        assert!(!connect_four(&board));
    }

    #[test]
    fn test_horizontal_win_completed_at_right_end() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_token(col, Cell::Red).unwrap();
        }
        assert!(connect_four(&board));
    }

    #[test]
    fn test_horizontal_win_completed_at_left_end() {
        let mut board = Board::new();
        for col in [3, 2, 1, 0] {
            board.drop_token(col, Cell::Red).unwrap();
        }
        assert!(connect_four(&board));
    }

    #[test]
    fn test_horizontal_win_completed_in_the_middle() {
        let mut board = Board::new();
        for col in [1, 2, 4, 3] {
            board.drop_token(col, Cell::Black).unwrap();
        }
        assert!(connect_four(&board));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Staircase rising to the right, Black on the diagonal
        board.drop_token(0, Cell::Black).unwrap();

        board.drop_token(1, Cell::Red).unwrap();
        board.drop_token(1, Cell::Black).unwrap();

        board.drop_token(2, Cell::Red).unwrap();
        board.drop_token(2, Cell::Red).unwrap();
        board.drop_token(2, Cell::Black).unwrap();

        board.drop_token(3, Cell::Red).unwrap();
        board.drop_token(3, Cell::Red).unwrap();
        board.drop_token(3, Cell::Red).unwrap();
        board.drop_token(3, Cell::Black).unwrap();

        assert!(connect_four(&board));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Staircase falling to the right, Red on the diagonal
        board.drop_token(6, Cell::Red).unwrap();

        board.drop_token(5, Cell::Black).unwrap();
        board.drop_token(5, Cell::Red).unwrap();

        board.drop_token(4, Cell::Black).unwrap();
        board.drop_token(4, Cell::Black).unwrap();
        board.drop_token(4, Cell::Red).unwrap();

        board.drop_token(3, Cell::Black).unwrap();
        board.drop_token(3, Cell::Black).unwrap();
        board.drop_token(3, Cell::Black).unwrap();
        board.drop_token(3, Cell::Red).unwrap();

        assert!(connect_four(&board));
    }

    #[test]
    fn test_opponent_token_breaks_run() {
        let mut board = Board::new();
        board.drop_token(0, Cell::Black).unwrap();
        board.drop_token(1, Cell::Black).unwrap();
        board.drop_token(2, Cell::Red).unwrap();
        board.drop_token(3, Cell::Black).unwrap();
        board.drop_token(4, Cell::Black).unwrap();
        assert!(!connect_four(&board));
    }

    #[test]
    fn test_run_does_not_wrap_around_edges() {
        let mut board = Board::new();
        // Three at the right edge plus one at the left edge
        for col in [4, 5, 6, 0] {
            board.drop_token(col, Cell::Black).unwrap();
        }
        assert!(!connect_four(&board));
    }

    #[test]
    fn test_five_in_a_row_counts_as_win() {
        let mut board = Board::new();
        // Fill 0..=4 leaving the middle for last
        for col in [0, 1, 3, 4, 2] {
            board.drop_token(col, Cell::Red).unwrap();
        }
        assert!(connect_four(&board));
    }

    #[test]
    fn test_win_only_seen_through_last_move() {
        let mut board = Board::new();
        // Black completes a row at the bottom, then Red drops elsewhere;
        // the detector pivots on Red's token and must not report a win.
        for col in 0..4 {
            board.drop_token(col, Cell::Black).unwrap();
        }
        board.drop_token(6, Cell::Red).unwrap();
        assert!(!connect_four(&board));
    }
}
