//! Pagination controls: Prev / numbered window / Next.
//!
//! The remote generator serves any page number for a fixed seed, so there is
//! no known page count; the numbered list is a small window around the
//! current page with a leading ellipsis once the window leaves page 1.

use egui::{Button, Ui};

/// Pages shown on each side of the current one.
const WINDOW: u32 = 2;

/// Renders the controls for `page` (1-based). Returns the page the user
/// asked for this frame, if any.
pub fn pagination(page: u32, ui: &mut Ui) -> Option<u32> {
    let mut requested: Option<u32> = None;

    ui.horizontal(|ui| {
        // Page 1 is the floor; Prev is simply disabled there.
        if ui.add_enabled(page > 1, Button::new("Prev")).clicked() {
            requested = Some(page - 1);
        }

        let start = page.saturating_sub(WINDOW).max(1);
        if start > 1 {
            ui.label("…");
        }
        for number in start..=page + WINDOW {
            let selected = number == page;
            if ui.selectable_label(selected, number.to_string()).clicked() && !selected {
                requested = Some(number);
            }
        }
        ui.label("…");

        if ui.button("Next").clicked() {
            requested = Some(page + 1);
        }
    });

    requested
}
