//! Authorization for the dashboard UI
//!
//! Role store, permission and navigation resolution, and the session that
//! ties a signed-in user's role to them.

pub mod rbac;
pub mod session;

// Re-export commonly used types
pub use rbac::{
    Capability, CapabilitySet, EntityKind, NavigationEntry, PermissionCheck, RbacSystem, Role,
    RoleOption, RoleStore,
};
pub use session::{Session, SessionProvider, StaticSessionProvider};
