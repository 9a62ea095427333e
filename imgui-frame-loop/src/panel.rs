use easy_imgui::{self as imgui, lbl_id};

use crate::{FrameStats, WindowGeometry};

/// Which of the built-in ImGui panels are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub demo: bool,
    pub metrics: bool,
    pub user_guide: bool,
}

impl Default for Panels {
    fn default() -> Panels {
        Panels {
            demo: true,
            metrics: false,
            user_guide: false,
        }
    }
}

/// The UI built every frame: the built-in panels enabled in [`Panels`] and the
/// "Diagnostics" window.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub panels: Panels,
    /// Window geometry, refreshed by the loop at the start of each frame.
    pub geometry: WindowGeometry,
    stats: FrameStats,
}

impl Diagnostics {
    pub fn new(panels: Panels) -> Diagnostics {
        Diagnostics {
            panels,
            ..Default::default()
        }
    }
    /// The frame stats shown in the last built frame.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    fn panels_menu(&mut self, ui: &imgui::Ui<Self>) {
        ui.with_menu_bar(|| {
            ui.menu_config(lbl_id("Panels", "panels")).with(|| {
                ui.checkbox(
                    lbl_id("User guide (F1)", "user_guide"),
                    &mut self.panels.user_guide,
                );
                ui.checkbox(lbl_id("Demo (F2)", "demo"), &mut self.panels.demo);
                ui.checkbox(
                    lbl_id("Metrics (F3)", "metrics"),
                    &mut self.panels.metrics,
                );
            });
        });
    }
}

impl imgui::UiBuilder for Diagnostics {
    fn do_ui(&mut self, ui: &imgui::Ui<Self>) {
        if self.panels.demo {
            ui.show_demo_window(Some(&mut self.panels.demo));
        }
        if self.panels.metrics {
            unsafe {
                easy_imgui_sys::ImGui_ShowMetricsWindow(&mut self.panels.metrics);
            }
        }
        if self.panels.user_guide {
            ui.window_config(lbl_id("User Guide", "user_guide"))
                .open(&mut self.panels.user_guide)
                .with(|| unsafe { easy_imgui_sys::ImGui_ShowUserGuide() });
        }

        self.stats = FrameStats::from_framerate(ui.io().Framerate);
        let stats = self.stats;
        let geom = self.geometry;
        ui.window_config(lbl_id("Diagnostics", "diagnostics"))
            .flags(imgui::WindowFlags::MenuBar | imgui::WindowFlags::AlwaysAutoResize)
            .with(|| {
                self.panels_menu(ui);
                ui.text(&format!(
                    "Frame time: {:.3} ms ({:.1} FPS)",
                    stats.frame_time_ms, stats.fps
                ));
                ui.separator();
                ui.text(&format!("Window size: {} x {}", geom.width, geom.height));
                ui.text(&format!("Window position: {}, {}", geom.x, geom.y));
                let pos = ui.get_window_pos();
                ui.text(&format!("ImGui window position: {:.0}, {:.0}", pos.x, pos.y));
                if ui.is_mouse_pos_valid() {
                    let mouse = ui.get_mouse_pos();
                    ui.text(&format!("Mouse position: {:.0}, {:.0}", mouse.x, mouse.y));
                } else {
                    ui.text("Mouse position: <outside>");
                }
                ui.separator();
                ui.text_disabled("Alt+Q or Ctrl+Q to quit");
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_demo_is_shown_at_first() {
        let d = Diagnostics::new(Panels::default());
        assert!(d.panels.demo);
        assert!(!d.panels.metrics);
        assert!(!d.panels.user_guide);
        assert_eq!(d.stats(), FrameStats::default());
    }
}
