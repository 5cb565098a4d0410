/// UI widgets for Password Tester.
pub mod status_bar;
