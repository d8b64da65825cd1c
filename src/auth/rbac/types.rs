//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the current dashboard user
///
/// Roles are not ordered: each role's capabilities are listed on their own
/// in the permission table rather than inherited from another role.
///
/// Deserialization goes through [`FromStr`](std::str::FromStr), so `"Admin"`
/// and `" team "` are accepted the same way as on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    /// Full dashboard administration
    Admin,
    /// Team member working on certificates
    Team,
    /// Unprivileged visitor
    #[default]
    Public,
}

impl Role {
    /// Every role, in the order the role switcher lists them
    pub const ALL: [Role; 3] = [Role::Admin, Role::Team, Role::Public];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Team => "team",
            Role::Public => "public",
        }
    }

    /// Human readable label shown in menus and the role switcher
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Team => "Team",
            Role::Public => "Public",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named permission flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    CanCreate,
    CanRead,
    CanUpdate,
    CanDelete,
    CanDeleteCertificate,
    CanDeleteTemplate,
    CanDeleteMember,
    CanDeleteCategory,
}

impl Capability {
    /// Every capability, in permission table order
    pub const ALL: [Capability; 8] = [
        Capability::CanCreate,
        Capability::CanRead,
        Capability::CanUpdate,
        Capability::CanDelete,
        Capability::CanDeleteCertificate,
        Capability::CanDeleteTemplate,
        Capability::CanDeleteMember,
        Capability::CanDeleteCategory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CanCreate => "canCreate",
            Capability::CanRead => "canRead",
            Capability::CanUpdate => "canUpdate",
            Capability::CanDelete => "canDelete",
            Capability::CanDeleteCertificate => "canDeleteCertificate",
            Capability::CanDeleteTemplate => "canDeleteTemplate",
            Capability::CanDeleteMember => "canDeleteMember",
            Capability::CanDeleteCategory => "canDeleteCategory",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability flags granted to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub can_delete_certificate: bool,
    pub can_delete_template: bool,
    pub can_delete_member: bool,
    pub can_delete_category: bool,
}

impl CapabilitySet {
    /// Look up a single flag
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::CanCreate => self.can_create,
            Capability::CanRead => self.can_read,
            Capability::CanUpdate => self.can_update,
            Capability::CanDelete => self.can_delete,
            Capability::CanDeleteCertificate => self.can_delete_certificate,
            Capability::CanDeleteTemplate => self.can_delete_template,
            Capability::CanDeleteMember => self.can_delete_member,
            Capability::CanDeleteCategory => self.can_delete_category,
        }
    }

    /// Flags paired with their capability, in table order
    pub fn iter(&self) -> impl Iterator<Item = (Capability, bool)> + '_ {
        Capability::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Capabilities that are granted
    pub fn granted(&self) -> Vec<Capability> {
        self.iter()
            .filter_map(|(c, granted)| granted.then_some(c))
            .collect()
    }
}

/// Labeled menu destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// Route path
    pub destination: &'static str,
    /// Menu label
    pub label: &'static str,
}

impl NavigationEntry {
    pub const fn new(label: &'static str, destination: &'static str) -> Self {
        Self { destination, label }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Capability that was checked
    pub capability: Capability,
    /// Whether permission is granted
    pub granted: bool,
    /// Role that granted the permission
    pub granted_by_role: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

/// Entry in the role switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    pub role: Role,
    pub label: &'static str,
    pub selected: bool,
}

/// Kind of dashboard record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Certificate,
    Template,
    Member,
    Category,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Certificate,
        EntityKind::Template,
        EntityKind::Member,
        EntityKind::Category,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Certificate => "certificate",
            EntityKind::Template => "template",
            EntityKind::Member => "member",
            EntityKind::Category => "category",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
