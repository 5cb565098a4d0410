/// Main `eframe::App` implementation for Password Tester.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::theme::PasswordTesterTheme;
use crate::widgets;

/// The Password Tester application.
pub struct PasswordTesterApp {
    state: AppState,
}

impl PasswordTesterApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state is constructed in `main` before `eframe::run_native` so that
    /// configuration problems are logged before the window opens.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        PasswordTesterTheme::for_dark_mode(state.dark_mode).apply(&cc.egui_ctx);
        Self { state }
    }
}

impl eframe::App for PasswordTesterApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        let theme = PasswordTesterTheme::for_dark_mode(self.state.dark_mode);
        theme.apply(ctx);

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_scan_messages();

        // Request continuous repaint while scanning.
        if self.state.phase == AppPhase::Scanning {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Per-source results ────────────────────────────────────────────
        egui::TopBottomPanel::bottom("results_panel")
            .resizable(true)
            .default_height(140.0)
            .min_height(60.0)
            .max_height(400.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                panels::results_panel::results_panel(ui, &self.state, &theme);
                ui.add_space(4.0);
            });

        // ── Left sidebar ──────────────────────────────────────────────────
        egui::SidePanel::left("input_panel")
            .default_width(280.0)
            .min_width(240.0)
            .max_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                panels::input_panel::input_panel(ui, &mut self.state, &theme);
            });

        // ── Central panel (console) ───────────────────────────────────────
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(theme.console_bg)
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                panels::console_panel::console_panel(ui, &self.state, &theme);
            });
    }
}
