//! Which announcements a user may see.

use chrono::{DateTime, Utc};

use crate::common::UserId;
use crate::domains::announcements::Announcement;

/// Announcements visible to `user_id` at `now`.
///
/// Visible iff not expired (no expiry, or expiry strictly after `now`) and
/// either addressed to everyone or listing the user. Recomputed on every
/// call, nothing is cached.
pub fn visible_to<'a>(
    announcements: &'a [Announcement],
    user_id: UserId,
    now: DateTime<Utc>,
) -> Vec<&'a Announcement> {
    announcements
        .iter()
        .filter(|a| !a.is_expired(now) && a.targets(user_id))
        .collect()
}
