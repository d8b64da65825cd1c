//! Role-Based Access Control (RBAC) system
//!
//! Maps the current role to capability flags, menus and reachable routes.
//! These checks gate the UI only; the data layer must enforce them again
//! (see [`crate::gateway::AuthorizedGateway`]).

mod navigation;
mod permissions;
mod roles;
mod store;
mod system;
mod types;

// Re-export public types and functions
pub use navigation::{OPEN_ROUTES, authorize_route, navigation_for_name, resolve_navigation};
pub use permissions::{
    can_delete, check_permission, delete_capability, permissions_for_name, require,
    resolve_permissions,
};
pub use roles::role_options;
pub use store::RoleStore;
pub use system::RbacSystem;
pub use types::{
    Capability, CapabilitySet, EntityKind, NavigationEntry, PermissionCheck, Role, RoleOption,
};
