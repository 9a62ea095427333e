/*!
 * A single-threaded frame loop for Dear ImGui on top of SDL3 and OpenGL.
 *
 * The loop itself, [`FrameLoop`], knows nothing about SDL: it drives any
 * [`Platform`], so the same code runs against the real [`Sdl3Platform`] or against
 * a scripted platform in tests.
 *
 * Every frame does, in this order:
 *  1. refresh the cached window geometry,
 *  2. drain the event queue, interpreting the program shortcuts and then forwarding
 *     every event to ImGui,
 *  3. build the UI, clear the background, render the ImGui draw-list,
 *  4. present.
 *
 * ```no_run
 * use imgui_frame_loop::{FrameLoop, Panels, Sdl3Platform, Theme, WindowInfo};
 *
 * # fn main() -> anyhow::Result<()> {
 * let info = WindowInfo::default();
 * let mut frame_loop =
 *     FrameLoop::start(|| Sdl3Platform::create(&info, Theme::Dark), Panels::default())?;
 * frame_loop.run();
 * frame_loop.shutdown();
 * # Ok(())
 * # }
 * ```
 */

mod banner;
mod frame_loop;
mod panel;
mod platform;
mod sdl;
mod shortcut;
mod state;
mod stats;
mod window_info;

pub use banner::*;
pub use frame_loop::*;
pub use panel::*;
pub use platform::*;
pub use sdl::*;
pub use shortcut::*;
pub use state::*;
pub use stats::*;
pub use window_info::*;

// Reexport the main dependencies to simplify dependencies.
pub use easy_imgui;
pub use sdl3;
