use anyhow::{Result, anyhow, bail};
use easy_imgui::ConfigFlags;
use easy_imgui_sys::sdl3_sys::everything::*;
use glow::HasContext;
use log::{debug, error, info, warn};
use sdl3::{
    EventPump,
    event::{Event, WindowEvent},
    video::{GLProfile, SwapInterval, WindowPos},
};

use crate::{
    Diagnostics, Input, KeyPress, Platform, TeardownStage, Theme, WindowFlags, WindowGeometry,
    WindowInfo, background_color,
};

/// Creates a Glow context from a `sdl3` video subsystem.
/// # Safety
/// Call this once after the window context is current.
unsafe fn glow_context(sdl_video: &sdl3::VideoSubsystem) -> glow::Context {
    unsafe {
        glow::Context::from_loader_function(|name| {
            use std::ffi::c_void;

            sdl_video
                .gl_get_proc_address(name)
                .map(|f| f as *const c_void)
                .unwrap_or_default()
        })
    }
}

/// Initializes the ImGui SDL3 and OpenGL3 backends.
///
/// # Safety
/// Call this once after the window context is current, with the ImGui context current.
unsafe fn init_backends(window: &sdl3::video::Window, sdl_gl: &sdl3::video::GLContext) {
    unsafe {
        easy_imgui_sys::ImGui_ImplSDL3_InitForOpenGL(window.raw(), sdl_gl.raw() as *mut _);
        easy_imgui_sys::ImGui_ImplOpenGL3_Init(c"#version 150".as_ptr());
    }
}

/// Deinitializes the backends.
///
/// # Safety
/// Call this just before destroying the ImGui context or the SDL3 window.
unsafe fn shutdown_backends() {
    unsafe {
        easy_imgui_sys::ImGui_ImplOpenGL3_Shutdown();
        easy_imgui_sys::ImGui_ImplSDL3_Shutdown();
    }
}

/// Gets an event from the event queue returning the low-level version.
///
/// The borrow of the pump only proves that SDL events are initialized.
fn sdl3_poll_event_ll(_pump: &mut EventPump) -> Option<SDL_Event> {
    let mut raw = std::mem::MaybeUninit::uninit();
    unsafe {
        let has_pending = SDL_PollEvent(raw.as_mut_ptr());
        if has_pending {
            Some(raw.assume_init())
        } else {
            None
        }
    }
}

fn clear_background(gl: &glow::Context, (width, height): (u32, u32)) {
    let [r, g, b, a] = background_color();
    unsafe {
        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear_color(r, g, b, a);
        gl.clear(glow::COLOR_BUFFER_BIT);
    }
}

fn window_pos(v: Option<i32>) -> WindowPos {
    v.map_or(WindowPos::Centered, WindowPos::Positioned)
}

// Fields are declared in teardown order, so that a plain drop is also correct.
struct Graphics {
    gl: glow::Context,
    sdl_gl: sdl3::video::GLContext,
    window: sdl3::video::Window,
}

struct Subsystems {
    event_pump: EventPump,
    _gamepad: Option<sdl3::GamepadSubsystem>,
    _video: sdl3::VideoSubsystem,
    _sdl: sdl3::Sdl,
}

/// The real [`Platform`]: an SDL3 window with an OpenGL context, and a Dear ImGui
/// context bound to both through the ImGui SDL3 and OpenGL3 backends.
pub struct Sdl3Platform {
    imgui: Option<easy_imgui::Context>,
    gfx: Option<Graphics>,
    sys: Option<Subsystems>,
    window_id: u32,
}

impl Sdl3Platform {
    /// Creates the window, the GL context and the ImGui context.
    ///
    /// Vertical sync is requested, and a hardware accelerated GL visual. If the
    /// latter is not available it falls back to whatever SDL can give.
    pub fn create(info: &WindowInfo, theme: Theme) -> Result<Sdl3Platform> {
        let sdl = sdl3::init().map_err(|e| anyhow!("cannot initialize SDL: {e}"))?;
        let video = sdl
            .video()
            .map_err(|e| anyhow!("cannot initialize SDL video: {e}"))?;
        let gamepad = match sdl.gamepad() {
            Ok(gamepad) => Some(gamepad),
            Err(e) => {
                warn!("gamepad subsystem unavailable: {e}");
                None
            }
        };
        let event_pump = sdl
            .event_pump()
            .map_err(|e| anyhow!("cannot get the SDL event pump: {e}"))?;

        let (mut window, sdl_gl) = match create_gl_window(&video, info, true) {
            Ok(w) => w,
            Err(e) => {
                warn!("accelerated GL window not available ({e:#}), trying without");
                create_gl_window(&video, info, false)?
            }
        };
        if let Err(e) = video.gl_set_swap_interval(SwapInterval::VSync) {
            warn!("vertical sync not available: {e}");
        }
        window.set_position(window_pos(info.x), window_pos(info.y));
        window.show();

        let gl = unsafe { glow_context(&video) };

        let imgui = unsafe {
            let mut imgui = easy_imgui::ContextBuilder::new().build();

            let io = imgui.io_mut();
            let io = io.inner();
            io.ConfigFlags |=
                (ConfigFlags::NavEnableKeyboard | ConfigFlags::NavEnableGamepad).bits();
            io.ConfigDpiScaleFonts = true;

            init_backends(&window, &sdl_gl);

            let window_scale = window.display_scale();
            let style = imgui.style_mut();
            theme.apply(style);
            style.scale_all_sizes(window_scale);
            style.FontScaleDpi = window_scale;
            imgui
        };
        info!(
            "window {:?} created, {}x{}, theme {theme:?}",
            info.title, info.width, info.height
        );

        Ok(Sdl3Platform {
            imgui: Some(imgui),
            window_id: window.id(),
            gfx: Some(Graphics { gl, sdl_gl, window }),
            sys: Some(Subsystems {
                event_pump,
                _gamepad: gamepad,
                _video: video,
                _sdl: sdl,
            }),
        })
    }
}

fn create_gl_window(
    video: &sdl3::VideoSubsystem,
    info: &WindowInfo,
    accelerated: bool,
) -> Result<(sdl3::video::Window, sdl3::video::GLContext)> {
    let gla = video.gl_attr();
    gla.set_context_version(3, 2);
    gla.set_context_profile(GLProfile::Core);
    gla.set_depth_size(0);
    gla.set_accelerated_visual(accelerated);

    let mut builder = video.window(&info.title, info.width, info.height);
    builder.opengl().hidden();
    if info.flags.contains(WindowFlags::RESIZABLE) {
        builder.resizable();
    }
    if info.flags.contains(WindowFlags::BORDERLESS) {
        builder.borderless();
    }
    if info.flags.contains(WindowFlags::FULLSCREEN) {
        builder.fullscreen();
    }
    if info.flags.contains(WindowFlags::MAXIMIZED) {
        builder.maximized();
    }
    if info.flags.contains(WindowFlags::HIGH_PIXEL_DENSITY) {
        builder.high_pixel_density();
    }
    let window = builder
        .build()
        .map_err(|e| anyhow!("cannot create window: {e}"))?;
    let sdl_gl = window
        .gl_create_context()
        .map_err(|e| anyhow!("cannot create GL context: {e}"))?;
    window
        .gl_make_current(&sdl_gl)
        .map_err(|e| anyhow!("cannot make GL context current: {e}"))?;
    debug!("GL window created, accelerated: {accelerated}");
    Ok((window, sdl_gl))
}

impl Platform for Sdl3Platform {
    type Event = SDL_Event;

    fn window_geometry(&self) -> WindowGeometry {
        let Some(gfx) = &self.gfx else {
            return WindowGeometry::default();
        };
        let (x, y) = gfx.window.position();
        let (width, height) = gfx.window.size();
        WindowGeometry {
            x,
            y,
            width,
            height,
        }
    }

    fn poll_event(&mut self) -> Option<SDL_Event> {
        let sys = self.sys.as_mut()?;
        sdl3_poll_event_ll(&mut sys.event_pump)
    }

    fn classify(&self, event: &SDL_Event) -> Option<Input> {
        match Event::from_ll(*event) {
            Event::KeyDown {
                keycode: Some(keycode),
                keymod,
                repeat,
                ..
            } => Some(Input::Key(KeyPress {
                keycode,
                keymod,
                repeat,
            })),
            Event::Quit { .. } => Some(Input::CloseRequested),
            Event::Window {
                win_event: WindowEvent::CloseRequested,
                window_id,
                ..
            } if window_id == self.window_id => Some(Input::CloseRequested),
            _ => None,
        }
    }

    fn forward_event(&mut self, event: &SDL_Event) {
        let Some(imgui) = self.imgui.as_mut() else {
            return;
        };
        unsafe {
            let _imgui = imgui.set_current();
            easy_imgui_sys::ImGui_ImplSDL3_ProcessEvent(event);
        }
    }

    fn render(&mut self, ui: &mut Diagnostics) {
        let (Some(imgui), Some(gfx)) = (self.imgui.as_mut(), self.gfx.as_ref()) else {
            return;
        };
        let pixels = gfx.window.size_in_pixels();
        unsafe {
            let mut imgui = imgui.set_current();
            easy_imgui_sys::ImGui_ImplOpenGL3_NewFrame();
            easy_imgui_sys::ImGui_ImplSDL3_NewFrame();

            imgui.do_frame(
                ui,
                |_| clear_background(&gfx.gl, pixels),
                |render_data| {
                    easy_imgui_sys::ImGui_ImplOpenGL3_RenderDrawData(
                        (&raw const *render_data).cast_mut(),
                    );
                },
            );
        }
    }

    fn present(&mut self) {
        if let Some(gfx) = &self.gfx {
            gfx.window.gl_swap_window();
        }
    }

    fn teardown(&mut self, stage: TeardownStage) -> Result<()> {
        match stage {
            TeardownStage::UiContext => {
                let Some(mut imgui) = self.imgui.take() else {
                    return Ok(());
                };
                // The GL backend deletes its objects, so its context should be current,
                // but the backends are shut down regardless.
                let current = match &self.gfx {
                    Some(gfx) => gfx.window.gl_make_current(&gfx.sdl_gl),
                    None => Ok(()),
                };
                unsafe {
                    let _imgui = imgui.set_current();
                    shutdown_backends();
                }
                drop(imgui);
                current.map_err(|e| anyhow!("cannot make GL context current: {e}"))?;
            }
            TeardownStage::Renderer => {
                if self.imgui.is_some() {
                    bail!("the UI context is still bound to the renderer");
                }
                drop(self.gfx.take());
            }
            TeardownStage::Subsystem => {
                if self.gfx.is_some() {
                    bail!("the window is still alive");
                }
                drop(self.sys.take());
            }
        }
        Ok(())
    }
}

impl Drop for Sdl3Platform {
    fn drop(&mut self) {
        for stage in TeardownStage::ORDER {
            if let Err(e) = self.teardown(stage) {
                error!("teardown {stage:?} on drop failed: {e:#}");
            }
        }
    }
}
