/// Side, central, and bottom panels composed by the app.
pub mod console_panel;
pub mod input_panel;
pub mod results_panel;
