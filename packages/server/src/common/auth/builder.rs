use super::{AuthError, Capability};
use crate::common::UserId;

/// Entry point for authorization checks
///
/// Usage:
/// ```
/// use directory_core::common::{Actor, Capability, UserId};
///
/// let admin = UserId::new();
/// Actor::new(admin, true)
///     .can(Capability::ProposeChanges)
///     .check()
///     .unwrap();
/// ```
pub struct Actor {
    actor_id: UserId,
    is_admin: bool,
}

impl Actor {
    /// `is_admin` comes from the verified session token.
    pub fn new(actor_id: UserId, is_admin: bool) -> Self {
        Self { actor_id, is_admin }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityBuilder {
        CapabilityBuilder {
            actor_id: self.actor_id,
            is_admin: self.is_admin,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    actor_id: UserId,
    is_admin: bool,
    capability: Capability,
}

impl CapabilityBuilder {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        if self.capability.requires_admin() {
            if !self.is_admin {
                return Err(AuthError::AdminRequired);
            }
            return Ok(());
        }

        match self.capability {
            Capability::ResolveChange { target } if target != self.actor_id => {
                Err(AuthError::PermissionDenied(
                    "only the targeted member may resolve this change".to_string(),
                ))
            }
            Capability::SendMessage if self.is_admin => Err(AuthError::PermissionDenied(
                "the administrator cannot message itself".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_check() {
        let result = Actor::new(UserId::new(), true)
            .can(Capability::ManageAnnouncements)
            .check();
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_admin_denied() {
        let result = Actor::new(UserId::new(), false)
            .can(Capability::ProposeChanges)
            .check();
        assert_eq!(result, Err(AuthError::AdminRequired));
    }

    #[test]
    fn test_target_member_can_resolve_change() {
        let member = UserId::new();
        let result = Actor::new(member, false)
            .can(Capability::ResolveChange { target: member })
            .check();
        assert!(result.is_ok());
    }

    #[test]
    fn test_other_member_cannot_resolve_change() {
        let result = Actor::new(UserId::new(), false)
            .can(Capability::ResolveChange {
                target: UserId::new(),
            })
            .check();
        assert!(matches!(result, Err(AuthError::PermissionDenied(_))));
    }

    #[test]
    fn test_admin_cannot_resolve_on_members_behalf() {
        let result = Actor::new(UserId::new(), true)
            .can(Capability::ResolveChange {
                target: UserId::new(),
            })
            .check();
        assert!(result.is_err());
    }

    #[test]
    fn test_only_members_send_messages() {
        assert!(Actor::new(UserId::new(), false)
            .can(Capability::SendMessage)
            .check()
            .is_ok());
        assert!(Actor::new(UserId::new(), true)
            .can(Capability::SendMessage)
            .check()
            .is_err());
    }
}
