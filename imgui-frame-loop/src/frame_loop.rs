use log::{debug, error, info, trace};

use crate::{Command, Diagnostics, LoopState, Panels, Platform, TeardownStage, command_for};

/// The application loop.
///
/// It owns the platform for the whole life of the program. There is no global state:
/// everything a frame needs is reached through `self`.
pub struct FrameLoop<P: Platform> {
    platform: P,
    diagnostics: Diagnostics,
    state: LoopState,
    quit: bool,
    frames: u64,
}

impl<P: Platform> FrameLoop<P> {
    /// Creates the platform and gets ready to run.
    ///
    /// If `create` fails the loop never starts and the error is returned, after
    /// being logged.
    pub fn start<F>(create: F, panels: Panels) -> anyhow::Result<FrameLoop<P>>
    where
        F: FnOnce() -> anyhow::Result<P>,
    {
        let state = LoopState::Uninitialized;
        match create() {
            Ok(platform) => {
                info!("startup complete");
                Ok(FrameLoop::new(platform, panels, state.started(true)))
            }
            Err(e) => {
                let state = state.started(false);
                error!("startup failed, {state:?}: {e:#}");
                Err(e)
            }
        }
    }

    fn new(platform: P, panels: Panels, state: LoopState) -> FrameLoop<P> {
        FrameLoop {
            platform,
            diagnostics: Diagnostics::new(panels),
            state,
            quit: false,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }
    /// Whether the quit shortcut has been seen. The loop stops at the end of the frame
    /// where this became `true`.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
    /// Number of completed frames.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
    pub fn platform(&self) -> &P {
        &self.platform
    }
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Runs frames until the quit flag is set.
    pub fn run(&mut self) {
        while self.state.is_running() {
            self.run_frame();
        }
        debug!("frame loop finished after {} frames", self.frames);
    }

    /// Runs one full frame. Does nothing if the loop is not running.
    pub fn run_frame(&mut self) {
        if !self.state.is_running() {
            return;
        }
        self.diagnostics.geometry = self.platform.window_geometry();

        while let Some(event) = self.platform.poll_event() {
            if let Some(cmd) = self.platform.classify(&event).as_ref().and_then(command_for) {
                self.apply(cmd);
            }
            self.platform.forward_event(&event);
        }

        self.platform.render(&mut self.diagnostics);
        self.platform.present();
        self.frames += 1;

        self.state = self.state.end_of_frame(self.quit);
    }

    fn apply(&mut self, cmd: Command) {
        trace!("command {cmd:?}");
        let panels = &mut self.diagnostics.panels;
        match cmd {
            Command::Quit => {
                if !self.quit {
                    info!("quit requested");
                }
                self.quit = true;
            }
            Command::ToggleUserGuide => panels.user_guide ^= true,
            Command::ToggleDemo => panels.demo ^= true,
            Command::ToggleMetrics => panels.metrics ^= true,
        }
    }

    /// Tears everything down, in [`TeardownStage::ORDER`].
    ///
    /// A failing stage is logged and the next one runs anyway.
    pub fn shutdown(mut self) -> LoopState {
        if self.state.is_running() {
            self.state = LoopState::ShuttingDown;
        }
        for stage in TeardownStage::ORDER {
            match self.platform.teardown(stage) {
                Ok(()) => debug!("teardown {stage:?} done"),
                Err(e) => error!("teardown {stage:?} failed: {e:#}"),
            }
        }
        self.state = self.state.torn_down();
        info!("shutdown complete");
        self.state
    }
}
