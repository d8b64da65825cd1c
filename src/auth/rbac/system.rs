//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

use super::navigation;
use super::permissions;
use super::roles::role_options;
use super::store::RoleStore;
use super::types::{Capability, CapabilitySet, NavigationEntry, PermissionCheck, Role, RoleOption};

/// Answers permission and navigation questions for the current role
///
/// Every query reads the shared [`RoleStore`] at call time, so clones of the
/// system never disagree about the role.
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
    /// Current role of the session
    pub(super) store: Arc<RoleStore>,
}

impl RbacSystem {
    /// Create a new RBAC system with its own store at the configured default role
    pub fn new(config: &RbacConfig) -> Self {
        info!("Initializing RBAC system with default role {}", config.default_role);
        Self::with_store(config, Arc::new(RoleStore::new(config.default_role)))
    }

    /// Create an RBAC system over an existing store
    pub fn with_store(config: &RbacConfig, store: Arc<RoleStore>) -> Self {
        Self {
            config: config.clone(),
            store,
        }
    }

    /// Shared role store
    pub fn store(&self) -> &Arc<RoleStore> {
        &self.store
    }

    /// Configuration this system was built with
    pub fn config(&self) -> &RbacConfig {
        &self.config
    }

    pub fn current_role(&self) -> Role {
        self.store.get_role()
    }

    /// Capabilities of the current role
    pub fn permissions(&self) -> CapabilitySet {
        permissions::resolve_permissions(self.current_role())
    }

    /// Menu of the current role
    pub fn navigation(&self) -> &'static [NavigationEntry] {
        navigation::resolve_navigation(self.current_role())
    }

    /// Detailed check of one capability for the current role
    pub fn check(&self, capability: Capability) -> PermissionCheck {
        let role = self.current_role();
        let check = permissions::check_permission(role, capability);
        debug!("Permission {} for role {}: granted={}", capability, role, check.granted);
        check
    }

    /// Fail with `Forbidden` unless the current role holds `capability`
    pub fn require(&self, capability: Capability) -> Result<()> {
        permissions::require(self.current_role(), capability)
    }

    /// Fail with `Forbidden` unless the current role may open `path`
    pub fn authorize_route(&self, path: &str) -> Result<()> {
        navigation::authorize_route(self.current_role(), path)
    }

    pub fn is_admin(&self) -> bool {
        self.current_role() == Role::Admin
    }

    /// Entries for the role switcher
    pub fn selectable_roles(&self) -> Vec<RoleOption> {
        role_options(self.current_role())
    }
}
