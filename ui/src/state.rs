//! The main application state.

use std::sync::Arc;

use roster_business::{DirectoryConfig, EhttpFetcher, UserQuery, ViewUserState};

/// Everything the app mutates, owned in one place and lent out to widgets.
pub struct State {
    /// Endpoint configuration.
    pub config: DirectoryConfig,
    /// Paginated page cache for the directory list.
    pub user_query: UserQuery,
    /// Selection + detail panel visibility.
    pub view_user: ViewUserState,
}

impl Default for State {
    fn default() -> Self {
        let config = DirectoryConfig::default();
        let user_query = UserQuery::new(&config, Arc::new(EhttpFetcher));
        Self {
            config,
            user_query,
            view_user: ViewUserState::new(),
        }
    }
}

impl State {
    /// State pointing at a test server (wiremock) instead of randomuser.me.
    pub fn test(base_url: String) -> Self {
        let config = DirectoryConfig::new(base_url);
        let user_query = UserQuery::new(&config, Arc::new(EhttpFetcher));
        Self {
            config,
            user_query,
            view_user: ViewUserState::new(),
        }
    }
}
