//! Key mapping from terminal events to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serpent::{Direction, GameMachine};

/// What the player asked for, independent of which key they pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Steer(Direction),
    /// Start from ready/game over, otherwise pause or resume.
    Toggle,
    Reset,
    Quit,
}

/// Map a key event to an intent. Releases and repeats of non-steering keys are ignored.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }
    let intent = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Intent::Steer(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Intent::Steer(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Intent::Steer(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Intent::Steer(Direction::Right)
        }
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
            Intent::Toggle
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    if key.kind == KeyEventKind::Repeat && !matches!(intent, Intent::Steer(_)) {
        return None;
    }
    Some(intent)
}

/// Forward an intent to the machine. `Quit` is handled by the caller.
pub fn apply_intent(machine: &mut GameMachine, intent: Intent) {
    match intent {
        Intent::Steer(direction) => machine.change_direction(direction),
        Intent::Toggle => {
            if machine.is_playing() {
                machine.pause();
            } else if machine.is_paused() {
                machine.resume();
            } else {
                machine.start();
            }
        }
        Intent::Reset => machine.reset(),
        Intent::Quit => {}
    }
}
