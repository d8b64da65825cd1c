//! Authorization configuration validators

use super::trait_def::Validate;
use crate::auth::Role;
use crate::config::models::*;
use tracing::{debug, warn};

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        if self.default_role == Role::Admin {
            warn!(
                "Default role is admin: sessions without a signed-in role will be able to delete records"
            );
        }

        Ok(())
    }
}
