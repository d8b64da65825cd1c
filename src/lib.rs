//! # certboard
//!
//! Role and permission core of a certificate management dashboard.
//!
//! ## Features
//!
//! - **Role store**: the session's current role (`admin`, `team`, `public`) with
//!   change notifications
//! - **Permission resolution**: fixed capability table per role
//! - **Navigation resolution**: ordered, role-scoped menus and route gating
//! - **Data gateway**: CRUD boundary with a wrapper that enforces capabilities
//!   at the data layer
//!
//! ## Quick Start
//!
//! ```rust
//! use certboard::{Config, Role, Session, StaticSessionProvider};
//!
//! let config = Config::default();
//! let session = Session::start(&StaticSessionProvider::new(Some(Role::Team)), config.rbac());
//! let rbac = session.rbac();
//!
//! assert!(!rbac.permissions().can_delete);
//! assert_eq!(rbac.navigation()[0].destination, "/team/dashboard");
//!
//! session.sign_in(Role::Admin);
//! assert!(rbac.permissions().can_delete);
//! ```
//!
//! Capability checks here gate what the UI shows. Any deployment must enforce
//! them again where data is accessed; see [`gateway::AuthorizedGateway`].

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    authorize_route, navigation_for_name, permissions_for_name, resolve_navigation,
    resolve_permissions,
};
pub use auth::{
    Capability, CapabilitySet, EntityKind, NavigationEntry, PermissionCheck, RbacSystem, Role,
    RoleOption, RoleStore, Session, SessionProvider, StaticSessionProvider,
};
pub use config::Config;
pub use gateway::{AuthorizedGateway, DataGateway, InMemoryGateway, Record};
pub use utils::error::{DashboardError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
