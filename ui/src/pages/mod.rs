//! Pages module for the application.
//!
//! The app has a single route: the directory page.

mod directory_page;

pub use directory_page::directory_page;
