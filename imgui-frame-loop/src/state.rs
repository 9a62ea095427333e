/// Lifecycle of the application loop.
///
/// ```text
/// Uninitialized --ok--> Running --quit--> ShuttingDown --> Terminated
///       \--------------------failed---------------------->/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Uninitialized,
    Running,
    ShuttingDown,
    Terminated,
}

impl LoopState {
    /// The outcome of creating the window, renderer and UI context.
    pub fn started(self, ok: bool) -> LoopState {
        match (self, ok) {
            (LoopState::Uninitialized, true) => LoopState::Running,
            (LoopState::Uninitialized, false) => LoopState::Terminated,
            (s, _) => s,
        }
    }
    /// Checked once at the end of every frame.
    pub fn end_of_frame(self, quit: bool) -> LoopState {
        match (self, quit) {
            (LoopState::Running, true) => LoopState::ShuttingDown,
            (s, _) => s,
        }
    }
    /// Teardown always completes, even if some of its steps fail.
    pub fn torn_down(self) -> LoopState {
        match self {
            LoopState::Uninitialized => LoopState::Uninitialized,
            _ => LoopState::Terminated,
        }
    }
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let s = LoopState::default().started(true);
        assert_eq!(s, LoopState::Running);
        let s = s.end_of_frame(false);
        assert_eq!(s, LoopState::Running);
        let s = s.end_of_frame(true);
        assert_eq!(s, LoopState::ShuttingDown);
        assert_eq!(s.torn_down(), LoopState::Terminated);
    }

    #[test]
    fn failed_startup_terminates() {
        assert_eq!(
            LoopState::Uninitialized.started(false),
            LoopState::Terminated
        );
    }

    #[test]
    fn quit_is_ignored_outside_running() {
        assert_eq!(
            LoopState::Uninitialized.end_of_frame(true),
            LoopState::Uninitialized
        );
        assert_eq!(
            LoopState::Terminated.end_of_frame(true),
            LoopState::Terminated
        );
        assert_eq!(LoopState::Running.started(false), LoopState::Running);
    }

    #[test]
    fn teardown_from_running_still_terminates() {
        assert_eq!(LoopState::Running.torn_down(), LoopState::Terminated);
    }
}
