/// Results panel — one row per scanned wordlist.
use crate::state::AppState;
use crate::theme::PasswordTesterTheme;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use pwtester_core::model::format::format_elapsed;

const ROW_HEIGHT: f32 = 18.0;

pub fn results_panel(ui: &mut Ui, state: &AppState, theme: &PasswordTesterTheme) {
    if state.source_results.is_empty() {
        ui.label(
            egui::RichText::new("No wordlists scanned yet.")
                .size(12.0)
                .color(theme.text_muted),
        );
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .stick_to_bottom(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().at_least(60.0))
        .header(20.0, |mut header| {
            for title in ["Wordlist", "Outcome", "Line", "Time"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for result in &state.source_results {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(result.source.as_str());
                    });
                    row.col(|ui| {
                        if result.matched {
                            ui.colored_label(theme.weak, "MATCH");
                        } else {
                            ui.colored_label(theme.strong, "no match");
                        }
                    });
                    row.col(|ui| {
                        let line = result
                            .matched_line
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        ui.label(line);
                    });
                    row.col(|ui| {
                        ui.label(format_elapsed(result.elapsed_secs));
                    });
                });
            }
        });
}
