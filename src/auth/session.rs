//! Session lifecycle around a role store
//!
//! A session starts with the role supplied by the sign-in provider, or the
//! configured default when the provider has none.

use crate::config::RbacConfig;
use std::sync::Arc;
use tracing::info;

use super::rbac::{RbacSystem, Role, RoleStore};

/// Source of the signed-in user's role
pub trait SessionProvider {
    /// Role of the signed-in user, if any
    fn initial_role(&self) -> Option<Role>;
}

/// Provider that always reports the same role
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSessionProvider {
    role: Option<Role>,
}

impl StaticSessionProvider {
    pub fn new(role: Option<Role>) -> Self {
        Self { role }
    }

    /// Provider for an anonymous visitor
    pub fn anonymous() -> Self {
        Self { role: None }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn initial_role(&self) -> Option<Role> {
        self.role
    }
}

/// One user session owning its role store
#[derive(Debug)]
pub struct Session {
    config: RbacConfig,
    store: Arc<RoleStore>,
}

impl Session {
    /// Start a session
    pub fn start<P: SessionProvider + ?Sized>(provider: &P, config: &RbacConfig) -> Self {
        let role = match provider.initial_role() {
            Some(role) => role,
            None => {
                info!(
                    "Session provider supplied no role, using default {}",
                    config.default_role
                );
                config.default_role
            }
        };

        Self {
            config: config.clone(),
            store: Arc::new(RoleStore::new(role)),
        }
    }

    pub fn role(&self) -> Role {
        self.store.get_role()
    }

    pub fn store(&self) -> &Arc<RoleStore> {
        &self.store
    }

    /// Switch to the role of a newly signed-in user
    pub fn sign_in(&self, role: Role) -> bool {
        self.store.set_role(role)
    }

    /// Drop back to the configured default role
    pub fn sign_out(&self) -> bool {
        self.store.set_role(self.config.default_role)
    }

    /// RBAC system sharing this session's store
    pub fn rbac(&self) -> RbacSystem {
        RbacSystem::with_store(&self.config, self.store.clone())
    }
}
