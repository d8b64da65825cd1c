//! Authorization configuration

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RbacConfig {
    /// Role of a session whose provider supplies none, and the role restored
    /// on sign-out
    #[serde(default)]
    pub default_role: Role,
}

impl RbacConfig {
    /// Merge RBAC configurations
    ///
    /// `other` only wins when its role differs from the default, so an
    /// overlay cannot reset `default_role` back to `public`.
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_role != Role::default() {
            self.default_role = other.default_role;
        }
        self
    }
}
