//! Keyboard input
//!
//! Maps raw key codes to game actions:
//!   W/A/S/D or arrows: move
//!   P: pause
//!   Q: quit
//!
//! Movement is event-based rather than polled: a press sets the axis
//! velocity, a release zeroes it. Releasing either key of an axis zeroes
//! the whole axis even if the opposite key is still held; the last key
//! event wins.

use macroquad::input::KeyCode;

/// Everything a key event can mean to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TogglePause,
    Quit,
}

/// Movement axis an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Action {
    /// The axis a movement action drives, None for system actions.
    pub fn movement_axis(self) -> Option<Axis> {
        match self {
            Action::MoveUp | Action::MoveDown => Some(Axis::Vertical),
            Action::MoveLeft | Action::MoveRight => Some(Axis::Horizontal),
            Action::TogglePause | Action::Quit => None,
        }
    }
}

/// Translate a key code into an action, if it is bound to one.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::W | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::S | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::A | KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::D | KeyCode::Right => Some(Action::MoveRight),
        KeyCode::P => Some(Action::TogglePause),
        KeyCode::Q => Some(Action::Quit),
        _ => None,
    }
}
