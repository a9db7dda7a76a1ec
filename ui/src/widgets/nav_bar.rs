//! Top navigation bar: app title on the left, build version on the right.

use egui::{Response, Ui};

use super::version_label;

pub fn nav_bar(ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        ui.strong("Roster");
        ui.separator();
        ui.label("User Directory");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            version_label(ui);
        });
    })
    .response
}
