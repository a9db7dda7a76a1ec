//! Domain logic for the Roster user directory.
//!
//! This crate is UI-framework-agnostic: the ui crate reads state and renders,
//! while everything with behavior lives here:
//! - [`User`] and friends: the wire shape of the randomuser.me API
//! - [`DirectoryConfig`]: which endpoint to talk to
//! - [`FetchService`]: injectable HTTP transport
//! - [`UserQuery`]: the paginated page cache (staleness, retries, coalescing)
//! - [`ViewUserState`]: selection + detail panel visibility

mod config;
mod fetch_service;
mod user;
mod user_query;
mod view_user_state;

pub use config::DirectoryConfig;
pub use fetch_service::{EhttpFetcher, FetchService};
pub use user::{Login, Name, Picture, User, UsersResponse};
pub use user_query::{
    FetchError, QueryStatus, UserQuery, UserQueryResult, MAX_ATTEMPTS, PAGE_SEED, PAGE_SIZE,
    STALE_TIME_SECS,
};
pub use view_user_state::ViewUserState;

#[cfg(test)]
pub use fetch_service::MockFetcher;
