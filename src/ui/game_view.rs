use crate::game::{Cell, GameSession, Player, Status, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Total width of the board text block: 3-char left margin, 7 cells of 3
/// characters each, 2-char right margin.
const BOARD_WIDTH: u16 = 26;
/// Hover line, top border, 6 rows, bottom border, column numbers.
const BOARD_HEIGHT: u16 = 10;
const CELL_WIDTH: u16 = 3;
const GRID_LEFT: u16 = 3;

/// Render the whole game screen. Returns the rectangle the board was drawn
/// into so the caller can hit-test mouse events against it.
pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
    ascii_tokens: bool,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Message / banner
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    let board_area = board_rect(chunks[1]);
    render_board(frame, session, selected_column, ascii_tokens, board_area);
    render_message(frame, session, message, chunks[2]);
    render_controls(frame, chunks[3]);

    board_area
}

/// The fixed-size board block centered inside `area`. Mouse hit-testing
/// relies on this same geometry, so all board drawing goes through it.
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Map a screen position to a board column, mirroring the original game's
/// full-height column buttons. Positions outside the column strip map to
/// nothing.
pub fn column_at(board: Rect, x: u16, y: u16) -> Option<usize> {
    if y < board.y || y >= board.y + board.height {
        return None;
    }
    let left = board.x + GRID_LEFT;
    if x < left {
        return None;
    }
    let col = ((x - left) / CELL_WIDTH) as usize;
    (col < COLS).then_some(col)
}

fn token(cell: Cell, ascii_tokens: bool) -> (&'static str, Color) {
    match (cell, ascii_tokens) {
        (Cell::Empty, _) => (" . ", Color::DarkGray),
        (Cell::Black, false) => (" \u{25cf} ", Color::DarkGray),
        (Cell::Red, false) => (" \u{25cf} ", Color::Red),
        (Cell::Black, true) => (" B ", Color::DarkGray),
        (Cell::Red, true) => (" R ", Color::Red),
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let current_player = session.current_player();
    let color = match current_player {
        Player::Black => Color::DarkGray,
        Player::Red => Color::Red,
    };

    let status = if session.is_over() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {}", current_player.name())
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    ascii_tokens: bool,
    area: Rect,
) {
    let board = session.board();
    let mut lines = Vec::new();

    // Hover line: the current player's token floats over the selected
    // column while the game is in progress
    let mut hover = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column && !session.is_over() {
            let (symbol, color) = token(session.current_player().to_cell(), ascii_tokens);
            hover.push(Span::styled(symbol, Style::default().fg(color)));
        } else {
            hover.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(hover));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = token(board.get(row, col), ascii_tokens);
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    let board_widget = Paragraph::new(lines);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, session: &GameSession, message: &Option<String>, area: Rect) {
    // The end-of-game banner outlives any transient notice
    let (text, color) = match session.status() {
        Status::Won(Player::Black) => ("Black Wins!!!".to_string(), Color::DarkGray),
        Status::Won(Player::Red) => ("Red Wins!!!".to_string(), Color::Red),
        Status::Draw => ("Draw...".to_string(), Color::Blue),
        Status::InProgress => (
            message.clone().unwrap_or_default(),
            Color::Yellow,
        ),
    };

    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Mouse: aim + click to drop  |  ←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rect_is_centered_and_fixed_size() {
        let area = Rect::new(0, 0, 80, 24);
        let board = board_rect(area);
        assert_eq!(board.width, BOARD_WIDTH);
        assert_eq!(board.height, BOARD_HEIGHT);
        assert_eq!(board.x, (80 - BOARD_WIDTH) / 2);
        assert_eq!(board.y, (24 - BOARD_HEIGHT) / 2);
    }

    #[test]
    fn test_board_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 10, 4);
        let board = board_rect(area);
        assert_eq!(board.width, 10);
        assert_eq!(board.height, 4);
    }

    #[test]
    fn test_column_at_maps_each_column() {
        let board = Rect::new(20, 5, BOARD_WIDTH, BOARD_HEIGHT);
        for col in 0..COLS {
            let left = 20 + GRID_LEFT + CELL_WIDTH * col as u16;
            // Every x inside the cell maps to the same column
            for dx in 0..CELL_WIDTH {
                assert_eq!(column_at(board, left + dx, 8), Some(col));
            }
        }
    }

    #[test]
    fn test_column_at_rejects_positions_outside_the_strip() {
        let board = Rect::new(20, 5, BOARD_WIDTH, BOARD_HEIGHT);
        // Left margin
        assert_eq!(column_at(board, 20, 8), None);
        assert_eq!(column_at(board, 22, 8), None);
        // Right margin
        assert_eq!(column_at(board, 20 + GRID_LEFT + CELL_WIDTH * 7, 8), None);
        // Above and below the board
        assert_eq!(column_at(board, 30, 4), None);
        assert_eq!(column_at(board, 30, 5 + BOARD_HEIGHT), None);
    }

    #[test]
    fn test_column_at_covers_full_board_height() {
        let board = Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT);
        let x = GRID_LEFT + CELL_WIDTH * 3;
        for y in 0..BOARD_HEIGHT {
            assert_eq!(column_at(board, x, y), Some(3));
        }
    }
}
