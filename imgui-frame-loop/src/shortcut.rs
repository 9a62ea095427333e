use sdl3::keyboard::{Keycode, Mod};

/// A key-down event, reduced to what the loop needs to look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPress {
    pub keycode: Keycode,
    pub keymod: Mod,
    /// `true` if this is an auto-repeat of a key that is held down.
    pub repeat: bool,
}

impl KeyPress {
    pub fn new(keycode: Keycode, keymod: Mod) -> KeyPress {
        KeyPress {
            keycode,
            keymod,
            repeat: false,
        }
    }
    fn alt_or_ctrl(&self) -> bool {
        self.keymod
            .intersects(Mod::LALTMOD | Mod::RALTMOD | Mod::LCTRLMOD | Mod::RCTRLMOD)
    }
}

/// The part of an event that the program itself cares about.
///
/// Everything else is only of interest to ImGui.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Key(KeyPress),
    /// The window manager asked to close the main window, or SDL wants to quit.
    CloseRequested,
}

/// What the program does in response to an [`Input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleUserGuide,
    ToggleDemo,
    ToggleMetrics,
}

/// Maps an input to a program command.
///
/// Only `Alt+Q` and `Ctrl+Q` quit. `Escape` is deliberately left alone: ImGui uses it
/// to cancel text input and close popups.
pub fn command_for(input: &Input) -> Option<Command> {
    let key = match input {
        Input::CloseRequested => return Some(Command::Quit),
        Input::Key(key) => key,
    };
    if key.keycode == Keycode::Q && key.alt_or_ctrl() {
        return Some(Command::Quit);
    }
    if key.repeat {
        return None;
    }
    if key.keycode == Keycode::F1 {
        Some(Command::ToggleUserGuide)
    } else if key.keycode == Keycode::F2 {
        Some(Command::ToggleDemo)
    } else if key.keycode == Keycode::F3 {
        Some(Command::ToggleMetrics)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(keycode: Keycode, keymod: Mod) -> Option<Command> {
        command_for(&Input::Key(KeyPress::new(keycode, keymod)))
    }

    #[test]
    fn alt_or_ctrl_q_quits() {
        for m in [Mod::LALTMOD, Mod::RALTMOD, Mod::LCTRLMOD, Mod::RCTRLMOD] {
            assert_eq!(key(Keycode::Q, m), Some(Command::Quit), "{m:?}");
        }
        assert_eq!(
            key(Keycode::Q, Mod::LCTRLMOD | Mod::LSHIFTMOD),
            Some(Command::Quit)
        );
    }

    #[test]
    fn plain_or_shifted_q_does_not_quit() {
        assert_eq!(key(Keycode::Q, Mod::NOMOD), None);
        assert_eq!(key(Keycode::Q, Mod::LSHIFTMOD), None);
        assert_eq!(key(Keycode::Q, Mod::LGUIMOD), None);
    }

    #[test]
    fn escape_is_left_to_imgui() {
        assert_eq!(key(Keycode::Escape, Mod::NOMOD), None);
        assert_eq!(key(Keycode::Escape, Mod::LALTMOD), None);
    }

    #[test]
    fn alt_with_another_letter_does_not_quit() {
        assert_eq!(key(Keycode::W, Mod::LALTMOD), None);
        assert_eq!(key(Keycode::X, Mod::LCTRLMOD), None);
    }

    #[test]
    fn function_keys_toggle_panels() {
        assert_eq!(key(Keycode::F1, Mod::NOMOD), Some(Command::ToggleUserGuide));
        assert_eq!(key(Keycode::F2, Mod::NOMOD), Some(Command::ToggleDemo));
        assert_eq!(key(Keycode::F3, Mod::NOMOD), Some(Command::ToggleMetrics));
    }

    #[test]
    fn repeated_toggles_are_ignored() {
        let mut press = KeyPress::new(Keycode::F2, Mod::NOMOD);
        press.repeat = true;
        assert_eq!(command_for(&Input::Key(press)), None);

        let mut quit = KeyPress::new(Keycode::Q, Mod::LALTMOD);
        quit.repeat = true;
        assert_eq!(command_for(&Input::Key(quit)), Some(Command::Quit));
    }

    #[test]
    fn close_request_quits() {
        assert_eq!(command_for(&Input::CloseRequested), Some(Command::Quit));
    }
}
