use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::UserId;

/// User record as held by the directory.
///
/// `email`, `phone` and `member_id` are protected: after registration they
/// change only through an accepted pending change. `password` holds an opaque
/// hashed credential, never plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub member_id: String,
    pub occupation: String,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    pub password: String,
    pub role: Role,
    pub email_verified: EmailVerification,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Shallow overwrite of the protected fields present in `updates`.
    pub fn apply(&mut self, updates: &ContactUpdates) {
        if let Some(email) = &updates.email {
            self.email = email.clone();
        }
        if let Some(phone) = &updates.phone {
            self.phone = phone.clone();
        }
        if let Some(member_id) = &updates.member_id {
            self.member_id = member_id.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

/// Email verification state. Serialized as `false`, `true` or `"skipped"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailVerification {
    #[default]
    Unverified,
    Verified,
    Skipped,
}

impl Serialize for EmailVerification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EmailVerification::Unverified => serializer.serialize_bool(false),
            EmailVerification::Verified => serializer.serialize_bool(true),
            EmailVerification::Skipped => serializer.serialize_str("skipped"),
        }
    }
}

impl<'de> Deserialize<'de> for EmailVerification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(EmailVerification::Verified),
            Raw::Flag(false) => Ok(EmailVerification::Unverified),
            Raw::Text(text) if text == "skipped" => Ok(EmailVerification::Skipped),
            Raw::Text(other) => Err(serde::de::Error::custom(format!(
                "unknown email verification state: {other}"
            ))),
        }
    }
}

/// Registration input. `password` is whatever credential the caller wants
/// stored; the auth domain hashes before handing it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub occupation: String,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub institution: Option<String>,
    pub email: String,
    pub password: String,
}

/// Partial update of the protected fields, any subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl ContactUpdates {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.member_id.is_none()
    }
}
