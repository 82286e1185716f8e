use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Maps raw terminal events to game actions.
///
/// Swipes are read as a left-button drag: press marks the start, release
/// turns the displacement into a direction.
#[derive(Debug, Default)]
pub struct InputHandler {
    drag_start: Option<(u16, u16)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { drag_start: None }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Turn(Direction::Up),
            KeyCode::Down => KeyAction::Turn(Direction::Down),
            KeyCode::Left => KeyAction::Turn(Direction::Left),
            KeyCode::Right => KeyAction::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Turn(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> KeyAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_start = Some((mouse.column, mouse.row));
                KeyAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => match self.drag_start.take() {
                Some((x0, y0)) => {
                    // Board cells are two columns wide and one row tall
                    let dx = (i32::from(mouse.column) - i32::from(x0)) / 2;
                    let dy = i32::from(mouse.row) - i32::from(y0);
                    KeyAction::Turn(Direction::from_swipe(dx, dy))
                }
                None => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn swipe(handler: &mut InputHandler, from: (u16, u16), to: (u16, u16)) -> KeyAction {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1);
        assert_eq!(handler.handle_mouse_event(down), KeyAction::None);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1);
        handler.handle_mouse_event(up)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(up), KeyAction::Turn(Direction::Up));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(down), KeyAction::Turn(Direction::Down));

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(left), KeyAction::Turn(Direction::Left));

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(right), KeyAction::Turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), KeyAction::Turn(Direction::Up));

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(a), KeyAction::Turn(Direction::Left));

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(s), KeyAction::Turn(Direction::Down));

        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(d), KeyAction::Turn(Direction::Right));

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(w_upper), KeyAction::Turn(Direction::Up));
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);

        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(r), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);
    }

    #[test]
    fn test_swipes() {
        let mut handler = InputHandler::new();

        assert_eq!(swipe(&mut handler, (10, 10), (20, 12)), KeyAction::Turn(Direction::Right));
        assert_eq!(swipe(&mut handler, (20, 10), (5, 7)), KeyAction::Turn(Direction::Left));
        assert_eq!(swipe(&mut handler, (10, 2), (11, 9)), KeyAction::Turn(Direction::Down));
        assert_eq!(swipe(&mut handler, (10, 9), (8, 1)), KeyAction::Turn(Direction::Up));
    }

    #[test]
    fn test_swipe_measured_in_board_cells() {
        let mut handler = InputHandler::new();

        // 6 columns is 3 board cells, less than 4 rows
        assert_eq!(swipe(&mut handler, (10, 10), (16, 14)), KeyAction::Turn(Direction::Down));
        // 10 columns is 5 board cells, more than 4 rows
        assert_eq!(swipe(&mut handler, (10, 10), (20, 6)), KeyAction::Turn(Direction::Right));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut handler = InputHandler::new();

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 4, 4);
        assert_eq!(handler.handle_mouse_event(up), KeyAction::None);

        let moved = mouse(MouseEventKind::Moved, 4, 4);
        assert_eq!(handler.handle_mouse_event(moved), KeyAction::None);
    }
}
