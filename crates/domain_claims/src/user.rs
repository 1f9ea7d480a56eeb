//! Application users

use serde::{Deserialize, Serialize};

use core_kernel::UserId;

/// An agent account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Fields supplied when registering a user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl User {
    /// Registers a user under the given id
    pub fn register(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
        }
    }
}
