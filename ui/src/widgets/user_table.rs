//! The directory table.
//!
//! Plain `egui::Grid` with header cells rather than `egui_extras`'
//! `TableBuilder`: clicks inside TableBuilder rows do not propagate to the
//! test harness, and a 20-row page doesn't need virtualized rows anyway.

use egui::{Color32, Frame, InnerResponse, Margin, RichText, ScrollArea, Stroke, Ui};
use roster_business::User;

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Renders one page of users. Returns the user whose View button was
/// clicked this frame, if any; opening the panel is the caller's business.
pub fn user_table(users: &[User], ui: &mut Ui) -> Option<User> {
    let mut selected: Option<User> = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("users_table")
                    .num_columns(4)
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        header_cell(ui, |ui| {
                            ui.strong("Name");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("Email");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("Phone");
                        });
                        header_cell(ui, |ui| {
                            ui.strong("");
                        });
                        ui.end_row();

                        for user in users {
                            data_cell(ui, |ui| {
                                ui.label(user.name.full());
                            });
                            data_cell(ui, |ui| {
                                ui.label(RichText::new(&user.email).monospace());
                            });
                            data_cell(ui, |ui| {
                                ui.label(&user.phone);
                            });
                            data_cell(ui, |ui| {
                                if ui.button("View").clicked() {
                                    selected = Some(user.clone());
                                }
                            });
                            ui.end_row();
                        }
                    });
            });
        });

    selected
}
