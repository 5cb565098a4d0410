/// Colour scheme and visual theme for Password Tester.
///
/// The window chrome follows a light (default) or dark palette; the console
/// is always a black terminal with lime text.
use crate::state::Verdict;
use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
pub struct PasswordTesterTheme {
    pub background: Color32,
    pub surface: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub separator: Color32,
    pub console_bg: Color32,
    pub console_text: Color32,
    pub weak: Color32,
    pub strong: Color32,
    pub error: Color32,
}

impl PasswordTesterTheme {
    /// Light theme — the default.
    pub fn light() -> Self {
        Self {
            background: Color32::WHITE,
            surface: Color32::from_rgb(0xf3, 0xf3, 0xf3),
            text_primary: Color32::BLACK,
            text_muted: Color32::from_rgb(0x70, 0x70, 0x70),
            accent: Color32::from_rgb(0x00, 0x78, 0xd7),
            separator: Color32::from_rgb(0xc0, 0xc0, 0xc0),
            console_bg: Color32::BLACK,
            console_text: Color32::from_rgb(0x00, 0xff, 0x00),
            weak: Color32::from_rgb(0xc4, 0x2b, 0x1c),
            strong: Color32::from_rgb(0x10, 0x7c, 0x10),
            error: Color32::from_rgb(0xd0, 0x80, 0x20),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
            console_bg: Color32::BLACK,
            console_text: Color32::from_rgb(0x00, 0xff, 0x00),
            weak: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            strong: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            error: Color32::from_rgb(0xfa, 0xb3, 0x87),
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn verdict_color(&self, verdict: Verdict) -> Color32 {
        match verdict {
            Verdict::Neutral => self.text_primary,
            Verdict::Weak => self.weak,
            Verdict::Strong => self.strong,
            Verdict::Error => self.error,
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.faint_bg_color = self.surface;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);
        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);

        ctx.set_style(style);
    }
}
