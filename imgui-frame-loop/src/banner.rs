use std::fmt;
use std::io::{self, Write};

use easy_imgui_sys::sdl3_sys::everything::SDL_GetVersion;

/// The version of the SDL library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdlVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SdlVersion {
    /// Decodes SDL3's packed version number, `major * 1000000 + minor * 1000 + patch`.
    pub fn from_packed(v: i32) -> SdlVersion {
        let v = v.max(0) as u32;
        SdlVersion {
            major: v / 1_000_000,
            minor: v / 1_000 % 1_000,
            patch: v % 1_000,
        }
    }
    /// The version of the SDL library linked at runtime.
    ///
    /// This is safe to call before SDL is initialized.
    pub fn linked() -> SdlVersion {
        let v = unsafe { SDL_GetVersion() };
        SdlVersion::from_packed(v)
    }
}

impl fmt::Display for SdlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Writes the startup banner: every argument on its own line, then the SDL version.
pub fn write_banner<W: Write, S: AsRef<str>>(
    out: &mut W,
    args: &[S],
    version: SdlVersion,
) -> io::Result<()> {
    for arg in args {
        writeln!(out, "{}", arg.as_ref())?;
    }
    writeln!(out, "SDL Version: {version}")?;
    out.flush()
}
