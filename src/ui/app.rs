use std::io;
use std::time::Duration;

use crate::config::AppConfig;
use crate::game::{GameSession, MoveError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};

use super::game_view;

pub struct App {
    session: GameSession,
    selected_column: usize,
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
    tick_rate: Duration,
    ascii_tokens: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            session: GameSession::new(),
            selected_column: 3, // Start in middle
            board_area: Rect::default(),
            should_quit: false,
            message: None,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            ascii_tokens: config.ui.ascii_tokens,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Handle mouse motion and clicks, translated against the board area
    /// recorded by the last render
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(col) = game_view::column_at(self.board_area, mouse.column, mouse.row) {
                    self.selected_column = col;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(col) = game_view::column_at(self.board_area, mouse.column, mouse.row) {
                    self.selected_column = col;
                    self.drop_token();
                }
            }
            _ => {}
        }
    }

    /// Drop the current player's token in the selected column
    fn drop_token(&mut self) {
        if self.session.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.session.play(self.selected_column) {
            Ok(_) => {
                self.message = None;
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full! Pick another.".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Reset the session for a fresh game
    fn new_game(&mut self) {
        self.session.reset();
        self.selected_column = 3;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI and remember where the board landed for hit-testing
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = game_view::render(
            frame,
            &self.session,
            self.selected_column,
            &self.message,
            self.ascii_tokens,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
