/// Frame timing as shown in the diagnostics window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub frame_time_ms: f32,
    pub fps: f32,
}

impl FrameStats {
    /// Builds the stats from a frames-per-second figure, usually ImGui's
    /// `io.Framerate`, which is already averaged over the last frames.
    ///
    /// A rate that is not a positive finite number (there is no frame yet) gives
    /// all zeros.
    pub fn from_framerate(fps: f32) -> FrameStats {
        if !fps.is_finite() || fps <= 0.0 {
            return FrameStats::default();
        }
        FrameStats {
            frame_time_ms: 1000.0 / fps,
            fps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(s: FrameStats) {
        let expected = 1000.0 / s.frame_time_ms;
        assert!(
            (s.fps - expected).abs() <= s.fps * 1e-5,
            "{s:?} vs {expected}"
        );
    }

    #[test]
    fn fps_matches_frame_time() {
        for fps in [1.0, 29.97, 60.0, 144.0, 1234.5] {
            let s = FrameStats::from_framerate(fps);
            assert_eq!(s.fps, fps);
            assert_consistent(s);
        }
    }

    #[test]
    fn sixty_hz() {
        let s = FrameStats::from_framerate(60.0);
        assert!((s.frame_time_ms - 16.666_666).abs() < 1e-3);
    }

    #[test]
    fn no_frame_yet() {
        assert_eq!(FrameStats::from_framerate(0.0), FrameStats::default());
        assert_eq!(FrameStats::from_framerate(-3.0), FrameStats::default());
        assert_eq!(FrameStats::from_framerate(f32::NAN), FrameStats::default());
        assert_eq!(
            FrameStats::from_framerate(f32::INFINITY),
            FrameStats::default()
        );
    }
}
