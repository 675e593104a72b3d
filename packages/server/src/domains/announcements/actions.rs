//! Announcement actions

use chrono::Utc;
use tracing::info;

use crate::common::{AnnouncementId, UserId};
use crate::domains::announcements::{targeting, Announcement, NewAnnouncement};
use crate::domains::directory::{DirectoryError, DirectoryResult};
use crate::kernel::ServerDeps;

/// Create an announcement. Resubmitting creates a second one.
pub async fn create_announcement(
    input: NewAnnouncement,
    created_by: UserId,
    deps: &ServerDeps,
) -> DirectoryResult<Announcement> {
    if input.content.trim().is_empty() {
        return Err(DirectoryError::validation("Announcement cannot be empty"));
    }

    let announcement = Announcement::new(input, created_by, Utc::now());
    let created = announcement.clone();
    deps.directory
        .commit(move |s| {
            s.state.announcements.push(announcement);
            Ok(())
        })
        .await?;

    info!(
        announcement_id = %created.id,
        audience = ?created.target_audience,
        targets = created.target_members.len(),
        "Announcement created"
    );
    Ok(created)
}

pub async fn delete_announcement(
    announcement_id: AnnouncementId,
    deps: &ServerDeps,
) -> DirectoryResult<()> {
    deps.directory
        .commit(|s| {
            let before = s.state.announcements.len();
            s.state.announcements.retain(|a| a.id != announcement_id);
            if s.state.announcements.len() == before {
                return Err(DirectoryError::AnnouncementNotFound);
            }
            Ok(())
        })
        .await?;

    info!(announcement_id = %announcement_id, "Announcement deleted");
    Ok(())
}

/// Announcements the given user can currently see.
pub async fn announcements_for(user_id: UserId, deps: &ServerDeps) -> Vec<Announcement> {
    let now = Utc::now();
    deps.directory
        .read(|s| {
            targeting::visible_to(&s.state.announcements, user_id, now)
                .into_iter()
                .cloned()
                .collect()
        })
        .await
}

/// Every announcement, expired or not (admin view).
pub async fn list_announcements(deps: &ServerDeps) -> Vec<Announcement> {
    deps.directory
        .read(|s| s.state.announcements.clone())
        .await
}
