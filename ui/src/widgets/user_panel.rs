//! Detail panel for the selected user.

use egui::{Color32, Response, RichText, Ui};
use roster_business::ViewUserState;

/// Renders the detail view. Shows a placeholder when the panel was opened
/// with no selection (a reachable state, kept on purpose).
pub fn user_panel(view_user: &mut ViewUserState, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Details");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    view_user.close();
                }
            });
        });
        ui.separator();

        let Some(user) = view_user.selected_user() else {
            ui.label("No user selected.");
            return;
        };

        ui.strong(format!(
            "{} {} {}",
            user.name.title, user.name.first, user.name.last
        ));
        ui.add_space(4.0);

        ui.label(RichText::new(&user.email).monospace());
        if !user.phone.is_empty() {
            ui.label(format!("Phone: {}", user.phone));
        }
        if !user.cell.is_empty() {
            ui.label(format!("Cell: {}", user.cell));
        }

        if !user.picture.large.is_empty() {
            ui.add_space(4.0);
            ui.hyperlink_to("Portrait", &user.picture.large);
        }

        ui.add_space(8.0);
        ui.colored_label(
            Color32::from_rgb(160, 160, 160),
            format!("id: {}", user.login.uuid),
        );
    })
    .response
}
