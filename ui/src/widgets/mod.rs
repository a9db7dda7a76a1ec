mod nav_bar;
mod pagination;
mod user_panel;
mod user_table;
mod version_label;

pub use nav_bar::nav_bar;
pub use pagination::pagination;
pub use user_panel::user_panel;
pub use user_table::user_table;
pub use version_label::version_label;
