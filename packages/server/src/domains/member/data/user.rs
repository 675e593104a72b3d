use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{mask_phone, UserId};
use crate::domains::member::models::{EmailVerification, Role, User};

/// User representation for anything crossing the system boundary.
///
/// The phone is masked and the stored credential is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub member_id: String,
    pub occupation: String,
    pub is_student: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    pub role: Role,
    pub email_verified: EmailVerification,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: mask_phone(&user.phone),
            email: user.email,
            member_id: user.member_id,
            occupation: user.occupation,
            is_student: user.is_student,
            institution: user.institution,
            role: user.role,
            email_verified: user.email_verified,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self::from(user.clone())
    }
}
