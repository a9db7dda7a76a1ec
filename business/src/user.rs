//! Wire types for the randomuser.me API.
//!
//! The remote generator controls this shape; we deserialize the fields the
//! directory displays and ignore the rest of the payload. Nothing is
//! validated or deduplicated locally: a record's identity is whatever
//! `login.uuid` the API handed out.

use serde::{Deserialize, Serialize};

/// One user record from the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login block; only the uuid matters to us.
    pub login: Login,
    /// Display name fields.
    pub name: Name,
    /// Contact email.
    pub email: String,
    /// Landline phone number.
    #[serde(default)]
    pub phone: String,
    /// Mobile phone number.
    #[serde(default)]
    pub cell: String,
    /// Portrait URLs.
    #[serde(default)]
    pub picture: Picture,
}

/// Remote identity of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    /// Stable unique identifier assigned by the remote API.
    pub uuid: String,
}

/// Name fields as the API splits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

impl Name {
    /// "First Last" for list rows and the detail panel heading.
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Portrait image URLs in the three sizes the API serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// Envelope of one page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    /// Ordered records for the requested page.
    pub results: Vec<User>,
}
