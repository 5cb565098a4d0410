/// Console panel — the scrolling progress log in the central area.
use crate::state::AppState;
use crate::theme::PasswordTesterTheme;
use egui::Ui;

/// Draw the console. Only visible rows are laid out, so a full scrollback
/// costs the same per frame as a short one.
pub fn console_panel(ui: &mut Ui, state: &AppState, theme: &PasswordTesterTheme) {
    let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show_rows(ui, row_height, state.console.len(), |ui, rows| {
            for line in state.console.range(rows) {
                ui.label(
                    egui::RichText::new(line)
                        .monospace()
                        .color(theme.console_text),
                );
            }
        });
}
