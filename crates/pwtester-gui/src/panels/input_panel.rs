/// Input panel — password, attack mode, and scan controls in the left sidebar.
use crate::state::{AppPhase, AppState};
use crate::theme::PasswordTesterTheme;
use egui::Ui;
use pwtester_core::model::AttackMode;

/// Draw the input panel (left sidebar content).
pub fn input_panel(ui: &mut Ui, state: &mut AppState, theme: &PasswordTesterTheme) {
    let scanning = state.phase == AppPhase::Scanning;

    ui.label("Enter your password:");
    let field = ui.add_enabled(
        !scanning,
        egui::TextEdit::singleline(&mut state.password)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(8.0);
    ui.label("Select Attack Mode:");
    ui.add_enabled_ui(!scanning, |ui| {
        ui.horizontal(|ui| {
            for mode in [AttackMode::Dictionary, AttackMode::BruteForce] {
                ui.radio_value(&mut state.mode, mode, mode.label());
            }
        });
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let check = ui
            .add_enabled(
                !scanning,
                egui::Button::new("\u{1f50d} Check Password").min_size(egui::vec2(128.0, 32.0)),
            )
            .on_disabled_hover_text("Cancel the running scan first");
        if check.clicked() || (submitted && !scanning) {
            state.check_password();
        }

        if ui
            .add_enabled(
                scanning,
                egui::Button::new("\u{23f9} Cancel").min_size(egui::vec2(72.0, 32.0)),
            )
            .clicked()
        {
            state.cancel_scan();
        }
    });

    ui.add_enabled_ui(!scanning && state.mode == AttackMode::Dictionary, |ui| {
        ui.checkbox(&mut state.cinematic, "Cinematic mode (slow scroll)");
    });

    ui.add_space(8.0);
    if !state.result_label.is_empty() {
        ui.label(
            egui::RichText::new(&state.result_label)
                .strong()
                .color(theme.verdict_color(state.verdict)),
        );
    }

    ui.add_space(16.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.checkbox(&mut state.dark_mode, "Dark theme");
        if ui.small_button("Clear console").clicked() {
            state.clear_console();
        }
    });
    ui.label(
        egui::RichText::new(format!(
            "Wordlists: {}",
            state.config.wordlists_dir.display()
        ))
        .size(11.0)
        .color(theme.text_muted),
    );
}
