/// Bottom status bar — scan phase and statistics.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use pwtester_core::model::format::format_count;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
            }
            AppPhase::Scanning => {
                ui.spinner();
                let current = state
                    .current_source
                    .as_deref()
                    .unwrap_or("starting");
                ui.label(
                    egui::RichText::new(format!("Scanning {current}..."))
                        .size(12.0)
                        .color(color_normal),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{} lists done",
                        format_count(state.summary.sources_scanned as u64)
                    ))
                    .size(12.0)
                    .color(color_normal),
                );
            }
            AppPhase::Results => {
                let (text, color) = if state.scan_was_cancelled {
                    ("\u{23f9} Scan cancelled", color_warning)
                } else if state.estimate.is_some() {
                    ("\u{2713} Estimate ready", color_normal)
                } else {
                    ("\u{2713} Done", color_normal)
                };
                ui.label(egui::RichText::new(text).size(12.0).color(color));

                if state.summary.sources_scanned > 0 {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{}/{} lists matched",
                            state.summary.sources_with_match, state.summary.sources_scanned
                        ))
                        .size(12.0)
                        .color(color_normal),
                    );
                }
                if let Some(duration) = state.scan_duration {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                            .size(12.0)
                            .color(color_weak),
                    );
                }
            }
        }

        if let Some(started) = state.scan_started_at {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("started {}", started.format("%H:%M:%S")))
                    .size(11.0)
                    .color(color_weak),
            );
        }
    });
}
