use chrono::Utc;
use roster_business::QueryStatus;

use crate::{pages, state::State, widgets};

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Test access to the app state.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the page cache: drain finished fetches, issue what's needed.
        // There is deliberately no refetch tied to window focus.
        self.state.user_query.poll(Utc::now());

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            widgets::nav_bar(ui);
        });

        if self.state.view_user.is_open() {
            egui::SidePanel::right("user_detail")
                .resizable(false)
                .default_width(260.0)
                .show(ctx, |ui| {
                    widgets::user_panel(&mut self.state.view_user, ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::directory_page(&mut self.state, ui);
        });

        // Keep frames coming while a fetch (or a retry timer) is outstanding;
        // the transport completes on another thread and egui won't repaint on
        // its own while idle.
        let query = &self.state.user_query;
        if query.is_active() || query.result().status == QueryStatus::Pending {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
