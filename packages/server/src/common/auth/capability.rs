use crate::common::UserId;

/// Capabilities checked before a directory operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Create or delete member accounts
    ManageMembers,

    /// Propose edits to a member's protected fields
    ProposeChanges,

    /// Read, reply to and delete member messages
    ManageMessages,

    /// Create and delete announcements
    ManageAnnouncements,

    /// Accept or decline a pending change targeting `target`
    ResolveChange { target: UserId },

    /// Send a message to the administrator
    SendMessage,
}

impl Capability {
    /// Whether only the administrator holds this capability
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Capability::ManageMembers
                | Capability::ProposeChanges
                | Capability::ManageMessages
                | Capability::ManageAnnouncements
        )
    }
}
