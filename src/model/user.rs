use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A dashboard account record as stored in the users collection.
///
/// `password` is plaintext and only present for locally-created accounts;
/// seeded accounts carry none and authenticate with the shared fallback
/// password. Mock-auth only, nothing here is a security boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Insert input: a full record minus the id, which the repository assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub avatar: Option<String>,
    pub password: Option<String>,
}

/// Merge-update input: the target id plus the fields to overlay. Fields left
/// as `None` keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub avatar: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn for_id(id: impl Into<String>) -> Self {
        UserPatch {
            id: id.into(),
            ..UserPatch::default()
        }
    }
}
