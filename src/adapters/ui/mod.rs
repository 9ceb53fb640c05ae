pub mod banner;
pub mod table;
pub mod tui;

/// Prints the welcome banner and applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(title: &str) {
    banner::print_welcome(title);
    tui::apply_theme();
}
