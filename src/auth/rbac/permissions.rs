//! Permission resolution
//!
//! The table below is the single place capabilities are decided. Create, read
//! and update are granted to every role; only admin may delete.

use crate::utils::error::{DashboardError, Result};

use super::types::{Capability, CapabilitySet, EntityKind, PermissionCheck, Role};

const ADMIN_CAPABILITIES: CapabilitySet = CapabilitySet {
    can_create: true,
    can_read: true,
    can_update: true,
    can_delete: true,
    can_delete_certificate: true,
    can_delete_template: true,
    can_delete_member: true,
    can_delete_category: true,
};

const TEAM_CAPABILITIES: CapabilitySet = CapabilitySet {
    can_create: true,
    can_read: true,
    can_update: true,
    can_delete: false,
    can_delete_certificate: false,
    can_delete_template: false,
    can_delete_member: false,
    can_delete_category: false,
};

const PUBLIC_CAPABILITIES: CapabilitySet = CapabilitySet {
    can_create: true,
    can_read: true,
    can_update: true,
    can_delete: false,
    can_delete_certificate: false,
    can_delete_template: false,
    can_delete_member: false,
    can_delete_category: false,
};

/// Capability set granted to `role`
pub fn resolve_permissions(role: Role) -> CapabilitySet {
    match role {
        Role::Admin => ADMIN_CAPABILITIES,
        Role::Team => TEAM_CAPABILITIES,
        Role::Public => PUBLIC_CAPABILITIES,
    }
}

/// Capability set for a role given by name
///
/// Unknown names fail with [`DashboardError::InvalidRole`].
pub fn permissions_for_name(name: &str) -> Result<CapabilitySet> {
    let role: Role = name.parse()?;
    Ok(resolve_permissions(role))
}

/// Detailed permission check
pub fn check_permission(role: Role, capability: Capability) -> PermissionCheck {
    if resolve_permissions(role).get(capability) {
        PermissionCheck {
            capability,
            granted: true,
            granted_by_role: Some(role),
            denial_reason: None,
        }
    } else {
        PermissionCheck {
            capability,
            granted: false,
            granted_by_role: None,
            denial_reason: Some(format!("{} is not granted to role {}", capability, role)),
        }
    }
}

/// Fail with [`DashboardError::Forbidden`] unless `role` holds `capability`
pub fn require(role: Role, capability: Capability) -> Result<()> {
    let check = check_permission(role, capability);
    match check.denial_reason {
        None => Ok(()),
        Some(reason) => Err(DashboardError::forbidden(reason)),
    }
}

/// Entity-specific delete flag for `kind`
pub fn delete_capability(kind: EntityKind) -> Capability {
    match kind {
        EntityKind::Certificate => Capability::CanDeleteCertificate,
        EntityKind::Template => Capability::CanDeleteTemplate,
        EntityKind::Member => Capability::CanDeleteMember,
        EntityKind::Category => Capability::CanDeleteCategory,
    }
}

/// Whether `role` may delete records of `kind`
///
/// Requires both the general delete flag and the entity-specific one.
pub fn can_delete(role: Role, kind: EntityKind) -> bool {
    let caps = resolve_permissions(role);
    caps.can_delete && caps.get(delete_capability(kind))
}
