use bitflags::bitflags;

/// Position and size of the main window, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

bitflags! {
    /// Window creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowFlags: u32 {
        const RESIZABLE = 1 << 0;
        const BORDERLESS = 1 << 1;
        const FULLSCREEN = 1 << 2;
        const MAXIMIZED = 1 << 3;
        const HIGH_PIXEL_DENSITY = 1 << 4;
    }
}

/// How to create the main window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub title: String,
    /// `None` centers the window on that axis.
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: u32,
    pub height: u32,
    pub flags: WindowFlags,
}

impl Default for WindowInfo {
    fn default() -> WindowInfo {
        WindowInfo {
            title: String::from("imgui-diag"),
            x: None,
            y: None,
            width: 1280,
            height: 720,
            flags: WindowFlags::RESIZABLE | WindowFlags::HIGH_PIXEL_DENSITY,
        }
    }
}

/// The fixed color theme applied to the ImGui style at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Classic,
}

impl Theme {
    pub fn apply(self, style: &mut easy_imgui::style::Style) {
        match self {
            Theme::Dark => style.set_colors_dark(),
            Theme::Light => style.set_colors_light(),
            Theme::Classic => style.set_colors_classic(),
        }
    }
}

/// The flat background color, as 8-bit RGB.
pub const BACKGROUND_RGB: [u8; 3] = [50, 50, 50];

/// [`BACKGROUND_RGB`] as normalized RGBA, ready for `glClearColor`.
pub fn background_color() -> [f32; 4] {
    let [r, g, b] = BACKGROUND_RGB.map(|c| f32::from(c) / 255.0);
    [r, g, b, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_centered_and_resizable() {
        let info = WindowInfo::default();
        assert_eq!((info.x, info.y), (None, None));
        assert!(info.flags.contains(WindowFlags::RESIZABLE));
        assert!(!info.flags.contains(WindowFlags::FULLSCREEN));
    }

    #[test]
    fn background_is_dark_gray() {
        let [r, g, b, a] = background_color();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((r - 50.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(a, 1.0);
    }
}
