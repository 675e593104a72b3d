use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{AnnouncementId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAudience {
    #[default]
    All,
    Specific,
}

/// An admin broadcast. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: AnnouncementId,
    pub content: String,
    pub target_audience: TargetAudience,
    /// Only consulted when `target_audience` is `Specific`
    #[serde(default)]
    pub target_members: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

/// Announcement creation input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    pub content: String,
    #[serde(default)]
    pub target_audience: TargetAudience,
    #[serde(default)]
    pub target_members: Vec<UserId>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Announcement {
    /// Build from input; duplicate target ids are collapsed, keeping the
    /// first occurrence.
    pub fn new(input: NewAnnouncement, created_by: UserId, now: DateTime<Utc>) -> Self {
        let mut target_members: Vec<UserId> = Vec::with_capacity(input.target_members.len());
        for id in input.target_members {
            if !target_members.contains(&id) {
                target_members.push(id);
            }
        }

        Self {
            id: AnnouncementId::new(),
            content: input.content,
            target_audience: input.target_audience,
            target_members,
            expiry_date: input.expiry_date,
            created_at: now,
            created_by,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry <= now)
    }

    pub fn targets(&self, user_id: UserId) -> bool {
        match self.target_audience {
            TargetAudience::All => true,
            TargetAudience::Specific => self.target_members.contains(&user_id),
        }
    }
}
