use clap::Parser;
use imgui_frame_loop::{Theme, WindowFlags, WindowInfo};

#[derive(Parser, Debug)]
#[command(name = "imgui-diag", version)]
#[command(about = "Shows frame rate, window geometry and mouse position with Dear ImGui", long_about = None)]
pub struct Cli {
    /// Window title
    #[arg(long, default_value = "imgui-diag")]
    pub title: String,

    /// Window x position (centered if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<i32>,

    /// Window y position (centered if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<i32>,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Do not let the user resize the window
    #[arg(long)]
    pub fixed_size: bool,

    #[arg(long)]
    pub borderless: bool,

    #[arg(long)]
    pub fullscreen: bool,

    #[arg(long)]
    pub maximized: bool,

    /// ImGui color theme
    #[arg(long, value_enum, default_value = "dark")]
    pub theme: ThemeArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
    Classic,
}

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Theme {
        match t {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
            ThemeArg::Classic => Theme::Classic,
        }
    }
}

impl Cli {
    pub fn window_info(&self) -> WindowInfo {
        let mut flags = WindowFlags::HIGH_PIXEL_DENSITY;
        flags.set(WindowFlags::RESIZABLE, !self.fixed_size);
        flags.set(WindowFlags::BORDERLESS, self.borderless);
        flags.set(WindowFlags::FULLSCREEN, self.fullscreen);
        flags.set(WindowFlags::MAXIMIZED, self.maximized);
        WindowInfo {
            title: self.title.clone(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_arguments_gives_the_default_window() {
        let cli = parse(&["prog"]);
        assert_eq!(cli.window_info(), WindowInfo::default());
        assert_eq!(Theme::from(cli.theme), Theme::Dark);
    }

    #[test]
    fn geometry_and_flags() {
        let cli = parse(&[
            "prog",
            "--x",
            "-100",
            "--y",
            "40",
            "--width",
            "800",
            "--height",
            "600",
            "--fixed-size",
            "--borderless",
            "--theme",
            "light",
        ]);
        let info = cli.window_info();
        assert_eq!((info.x, info.y), (Some(-100), Some(40)));
        assert_eq!((info.width, info.height), (800, 600));
        assert!(!info.flags.contains(WindowFlags::RESIZABLE));
        assert!(info.flags.contains(WindowFlags::BORDERLESS));
        assert!(!info.flags.contains(WindowFlags::FULLSCREEN));
        assert_eq!(Theme::from(cli.theme), Theme::Light);
    }

    #[test]
    fn zero_size_is_left_to_sdl() {
        let info = parse(&["prog", "--width", "0", "--height", "0"]).window_info();
        assert_eq!((info.width, info.height), (0, 0));
    }

    #[test]
    fn empty_title_is_accepted() {
        assert_eq!(parse(&["prog", "--title", ""]).window_info().title, "");
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["prog", "--width", "wide"]).is_err());
        assert!(Cli::try_parse_from(["prog", "--theme", "pink"]).is_err());
        assert!(Cli::try_parse_from(["prog", "--what"]).is_err());
    }
}
