//! Selection + detail panel state.
//!
//! One instance lives in the app state and is passed by reference to the
//! widgets that need it; there is no global store. All operations are total
//! functions over in-memory state, mutated from UI event handlers only.
//!
//! `selected_user` and `is_open` are deliberately independent: selecting a
//! user does not open the panel (callers call [`ViewUserState::open`]
//! themselves), and the panel can be open with no selection, in which case
//! the panel renders a placeholder. All four combinations are valid.

use crate::User;

/// Which user the detail panel shows, and whether it is visible.
#[derive(Debug, Clone, Default)]
pub struct ViewUserState {
    selected_user: Option<User>,
    is_open: bool,
}

impl ViewUserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the detail panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the detail panel. The selection is kept.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip panel visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Replace the selection unconditionally. Does not open the panel.
    pub fn set_selected_user(&mut self, user: User) {
        self.selected_user = Some(user);
    }

    /// Clear the selection, regardless of panel visibility.
    pub fn remove_selected_user(&mut self) {
        self.selected_user = None;
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.selected_user.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Login, Name, Picture};

    fn user(uuid: &str) -> User {
        User {
            login: Login {
                uuid: uuid.to_owned(),
            },
            name: Name {
                title: "Mx".to_owned(),
                first: "Test".to_owned(),
                last: "User".to_owned(),
            },
            email: format!("{uuid}@example.com"),
            phone: String::new(),
            cell: String::new(),
            picture: Picture::default(),
        }
    }

    #[test]
    fn open_then_close() {
        let mut state = ViewUserState::new();
        state.open();
        assert!(state.is_open());
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut state = ViewUserState::new();
        state.toggle();
        state.toggle();
        assert!(!state.is_open());

        state.open();
        state.toggle();
        state.toggle();
        assert!(state.is_open());
    }

    #[test]
    fn set_then_remove_clears_selection_regardless_of_visibility() {
        let mut state = ViewUserState::new();
        state.open();
        state.set_selected_user(user("x"));
        state.remove_selected_user();
        assert!(state.selected_user().is_none());
        assert!(state.is_open(), "clearing the selection leaves the panel alone");
    }

    #[test]
    fn set_then_open_composes() {
        let mut state = ViewUserState::new();
        state.set_selected_user(user("x"));
        assert!(!state.is_open(), "selecting must not auto-open the panel");

        state.open();
        assert_eq!(
            state.selected_user().map(|u| u.login.uuid.as_str()),
            Some("x")
        );
        assert!(state.is_open());
    }

    #[test]
    fn selection_is_replaced_unconditionally() {
        let mut state = ViewUserState::new();
        state.set_selected_user(user("first"));
        state.set_selected_user(user("second"));
        assert_eq!(
            state.selected_user().map(|u| u.login.uuid.as_str()),
            Some("second")
        );
    }
}
