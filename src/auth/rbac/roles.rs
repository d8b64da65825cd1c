//! Role parsing and role switcher helpers

use crate::utils::error::{DashboardError, Result};
use std::str::FromStr;

use super::types::{Role, RoleOption};

impl FromStr for Role {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DashboardError::invalid_role(s))
    }
}

impl TryFrom<&str> for Role {
    type Error = DashboardError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Role {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Options for the role switcher, with `current` marked as selected
pub fn role_options(current: Role) -> Vec<RoleOption> {
    Role::ALL
        .into_iter()
        .map(|role| RoleOption {
            role,
            label: role.label(),
            selected: role == current,
        })
        .collect()
}
