//! The user directory page: fetch status, user table, pagination controls.

use egui::{Color32, Response, Ui};
use log::debug;
use roster_business::QueryStatus;

use crate::{state::State, widgets};

/// Renders the directory list for the current page.
///
/// Selecting a row stores the user in the view-user state and opens the
/// detail panel; the page-change events from the pagination controls feed
/// straight back into the query's page input.
pub fn directory_page(state: &mut State, ui: &mut Ui) -> Response {
    // Split borrows: the table reads the query result while row selection
    // mutates the view-user state.
    let query = &mut state.user_query;
    let view_user = &mut state.view_user;

    ui.vertical(|ui| {
        ui.heading("User Directory");
        ui.add_space(8.0);

        let result = query.result();
        match result.status {
            QueryStatus::Pending if result.users.is_empty() => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading users...");
                });
            }
            QueryStatus::Error => {
                if let Some(error) = result.error {
                    ui.colored_label(Color32::RED, format!("Error: {error}"));
                }
            }
            _ => {}
        }

        let selected = widgets::user_table(result.users, ui);

        ui.add_space(8.0);
        let page_change = ui
            .horizontal(|ui| {
                let change = widgets::pagination(query.page(), ui);
                if result.refreshing {
                    ui.spinner();
                }
                change
            })
            .inner;

        if let Some(user) = selected {
            debug!("directory: viewing user {}", user.login.uuid);
            view_user.set_selected_user(user);
            view_user.open();
        }
        if let Some(page) = page_change {
            debug!("directory: requesting page {page}");
            query.set_page(page);
        }
    })
    .response
}
