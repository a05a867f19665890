//! Terminal UI: the event loop and the game screen. Input handling only
//! translates clicks and key presses into column indices; every game rule
//! lives in [`crate::game`].

mod app;
mod game_view;

pub use app::App;
