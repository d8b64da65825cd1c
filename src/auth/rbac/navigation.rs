//! Role-scoped navigation menus and route gating

use crate::utils::error::{DashboardError, Result};

use super::types::{NavigationEntry, Role};

const ADMIN_MENU: &[NavigationEntry] = &[
    NavigationEntry::new("Dashboard", "/admin/dashboard"),
    NavigationEntry::new("Certificates", "/admin/certificates"),
    NavigationEntry::new("Templates", "/admin/templates"),
    NavigationEntry::new("Members", "/admin/members"),
    NavigationEntry::new("Categories", "/admin/categories"),
    NavigationEntry::new("FAQ", "/faq"),
];

const TEAM_MENU: &[NavigationEntry] = &[
    NavigationEntry::new("Dashboard", "/team/dashboard"),
    NavigationEntry::new("Certificates", "/certificates"),
    NavigationEntry::new("Templates", "/admin/templates"),
    NavigationEntry::new("Members", "/admin/members"),
    NavigationEntry::new("Categories", "/admin/categories"),
    NavigationEntry::new("FAQ", "/faq"),
];

const PUBLIC_MENU: &[NavigationEntry] = &[
    NavigationEntry::new("Dashboard", "/dashboard"),
    NavigationEntry::new("FAQ", "/faq"),
];

/// Routes reachable by every role regardless of menu
pub const OPEN_ROUTES: &[&str] = &["/", "/login"];

/// Ordered menu for `role`
pub fn resolve_navigation(role: Role) -> &'static [NavigationEntry] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Team => TEAM_MENU,
        Role::Public => PUBLIC_MENU,
    }
}

/// Menu for a role given by name
///
/// Unknown names fail with [`DashboardError::InvalidRole`].
pub fn navigation_for_name(name: &str) -> Result<&'static [NavigationEntry]> {
    let role: Role = name.parse()?;
    Ok(resolve_navigation(role))
}

/// Allow `path` when it is an open route or lies under one of the role's
/// menu destinations
pub fn authorize_route(role: Role, path: &str) -> Result<()> {
    let path = normalize_path(path);

    if OPEN_ROUTES.contains(&path.as_str()) {
        return Ok(());
    }

    let allowed = resolve_navigation(role)
        .iter()
        .any(|entry| is_under(&path, entry.destination));

    if allowed {
        Ok(())
    } else {
        Err(DashboardError::forbidden(format!(
            "route {} is not available to role {}",
            path, role
        )))
    }
}

/// Strip query and fragment, then resolve `.`, `..` and empty segments
///
/// `..` never climbs above the root.
fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());

    let mut segments: Vec<&str> = Vec::new();
    for segment in path[..end].split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }

    format!("/{}", segments.join("/"))
}

fn is_under(path: &str, destination: &str) -> bool {
    match path.strip_prefix(destination) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
