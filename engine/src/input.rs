use crate::game::Direction;
use crate::session::SessionCommand;

/// A recognized keyboard intent: a turn or one of the two control
/// actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    TogglePause,
    Restart,
}

impl InputEvent {
    pub fn into_command(self) -> SessionCommand {
        match self {
            InputEvent::Turn(direction) => SessionCommand::Turn(direction),
            InputEvent::TogglePause => SessionCommand::TogglePause,
            InputEvent::Restart => SessionCommand::Restart,
        }
    }
}

/// Maps a logical key identifier (DOM-style key code) to an input
/// event. WASD and the arrow keys steer, Space toggles pause, R
/// restarts; anything else is ignored.
pub fn map_key_code(code: &str) -> Option<InputEvent> {
    match code {
        "KeyW" | "ArrowUp" => Some(InputEvent::Turn(Direction::Up)),
        "KeyS" | "ArrowDown" => Some(InputEvent::Turn(Direction::Down)),
        "KeyA" | "ArrowLeft" => Some(InputEvent::Turn(Direction::Left)),
        "KeyD" | "ArrowRight" => Some(InputEvent::Turn(Direction::Right)),
        "Space" => Some(InputEvent::TogglePause),
        "KeyR" => Some(InputEvent::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_keys_per_direction() {
        for (codes, direction) in [
            (["KeyW", "ArrowUp"], Direction::Up),
            (["KeyS", "ArrowDown"], Direction::Down),
            (["KeyA", "ArrowLeft"], Direction::Left),
            (["KeyD", "ArrowRight"], Direction::Right),
        ] {
            for code in codes {
                assert_eq!(map_key_code(code), Some(InputEvent::Turn(direction)));
            }
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key_code("Space"), Some(InputEvent::TogglePause));
        assert_eq!(map_key_code("KeyR"), Some(InputEvent::Restart));
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(map_key_code("Escape"), None);
        assert_eq!(map_key_code("KeyQ"), None);
        assert_eq!(map_key_code(""), None);
    }

    #[test]
    fn test_into_command() {
        assert_eq!(
            InputEvent::Turn(Direction::Left).into_command(),
            SessionCommand::Turn(Direction::Left)
        );
        assert_eq!(
            InputEvent::TogglePause.into_command(),
            SessionCommand::TogglePause
        );
        assert_eq!(InputEvent::Restart.into_command(), SessionCommand::Restart);
    }
}
