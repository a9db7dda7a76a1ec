use egui::{Color32, Response, Ui};
use roster_utils::version_info;

/// Displays the build version in the UI.
pub fn version_label(ui: &mut Ui) -> Response {
    ui.colored_label(
        Color32::from_rgb(200, 200, 200),
        version_info::format_version(),
    )
}
