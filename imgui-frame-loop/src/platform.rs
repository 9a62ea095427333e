use crate::{Diagnostics, Input, WindowGeometry};

/// The steps of the teardown, in the order they must run.
///
/// The UI context is bound to the renderer and window, and those to the windowing
/// subsystem, so each one must be released before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeardownStage {
    /// ImGui backends and context.
    UiContext,
    /// GL context and window.
    Renderer,
    /// Event pump, subsystems and the library itself.
    Subsystem,
}

impl TeardownStage {
    pub const ORDER: [TeardownStage; 3] = [
        TeardownStage::UiContext,
        TeardownStage::Renderer,
        TeardownStage::Subsystem,
    ];
}

/// The window, renderer and UI library, as seen by [`FrameLoop`](crate::FrameLoop).
///
/// All the methods are called from the same thread, the one that created the platform.
pub trait Platform {
    /// A raw event from the platform queue.
    type Event;

    /// Queries the current position and size of the main window.
    fn window_geometry(&self) -> WindowGeometry;
    /// Takes the next pending event, without waiting.
    fn poll_event(&mut self) -> Option<Self::Event>;
    /// Extracts the part of the event the program may react to.
    fn classify(&self, event: &Self::Event) -> Option<Input>;
    /// Hands the event to the UI library.
    fn forward_event(&mut self, event: &Self::Event);
    /// Builds the UI frame with `ui`, clears the background and renders the draw-list.
    fn render(&mut self, ui: &mut Diagnostics);
    /// Shows the rendered frame. May block waiting for vertical sync.
    fn present(&mut self);
    /// Releases the resources of one stage.
    ///
    /// Called once per stage, always in [`TeardownStage::ORDER`].
    fn teardown(&mut self, stage: TeardownStage) -> anyhow::Result<()>;
}
