//! Session, permission and navigation integration tests

#[cfg(test)]
mod tests {
    use crate::common::SessionFactory;
    use crate::common::assertions::{CapabilityAssertions, assert_forbidden};
    use certboard::{
        DashboardError, NavigationEntry, RbacSystem, Role, RoleStore, navigation_for_name,
        permissions_for_name, resolve_permissions,
    };
    use std::sync::Arc;

    // ==================== Permission Table ====================

    #[test]
    fn test_permission_table_per_role() {
        resolve_permissions(Role::Admin).assert_full_access();
        resolve_permissions(Role::Team).assert_no_delete();
        resolve_permissions(Role::Public).assert_no_delete();
    }

    #[test]
    fn test_unknown_role_has_no_fallback() {
        for name in ["superadmin", "guest", "", "administrator"] {
            let result = permissions_for_name(name);
            assert!(
                matches!(result, Err(DashboardError::InvalidRole(_))),
                "{:?} should be rejected",
                name
            );
            assert!(matches!(
                navigation_for_name(name),
                Err(DashboardError::InvalidRole(_))
            ));
        }
    }

    // ==================== Session Scenarios ====================

    #[test]
    fn test_team_session() {
        let session = SessionFactory::signed_in(Role::Team);
        let rbac = session.rbac();

        let menu = rbac.navigation();
        assert_eq!(menu.len(), 6);
        assert_eq!(
            menu.first(),
            Some(&NavigationEntry::new("Dashboard", "/team/dashboard"))
        );
        assert_eq!(menu.last(), Some(&NavigationEntry::new("FAQ", "/faq")));

        let caps = rbac.permissions();
        assert!(!caps.can_delete);
        assert!(caps.can_create);
    }

    #[test]
    fn test_public_to_admin_round_trip() {
        let session = SessionFactory::signed_in(Role::Public);
        let rbac = session.rbac();
        assert!(!rbac.permissions().can_delete);

        session.sign_in(Role::Admin);
        assert!(rbac.permissions().can_delete);
        assert_eq!(rbac.navigation()[0].destination, "/admin/dashboard");

        session.sign_in(Role::Public);
        assert!(!rbac.permissions().can_delete);
        assert_eq!(rbac.navigation().len(), 2);
    }

    #[test]
    fn test_double_set_role_keeps_admin_set() {
        let session = SessionFactory::signed_in(Role::Public);
        assert!(session.store().set_role(Role::Admin));
        assert!(!session.store().set_role(Role::Admin));
        session.rbac().permissions().assert_full_access();
    }

    #[test]
    fn test_anonymous_session_uses_configured_default() {
        let session = SessionFactory::anonymous_with_default(Role::Team);
        assert_eq!(session.role(), Role::Team);

        session.sign_in(Role::Admin);
        session.sign_out();
        assert_eq!(session.role(), Role::Team);
    }

    #[test]
    fn test_consumers_see_one_role() {
        let session = SessionFactory::signed_in(Role::Public);
        let consumers: Vec<RbacSystem> = (0..4).map(|_| session.rbac()).collect();

        session.sign_in(Role::Team);
        for rbac in &consumers {
            assert_eq!(rbac.current_role(), Role::Team);
            assert_eq!(rbac.navigation()[1].destination, "/certificates");
        }
    }

    #[tokio::test]
    async fn test_subscriber_sees_sign_in() {
        let session = SessionFactory::signed_in(Role::Public);
        let mut rx = session.store().subscribe();

        session.sign_in(Role::Admin);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Role::Admin);

        // Same role again: nothing to observe
        session.sign_in(Role::Admin);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_store_shared_across_threads() {
        let store = Arc::new(RoleStore::new(Role::Public));
        let writer = store.clone();

        std::thread::spawn(move || {
            writer.set_role(Role::Team);
        })
        .join()
        .unwrap();

        assert_eq!(store.get_role(), Role::Team);
    }

    // ==================== Route Gating ====================

    #[test]
    fn test_public_cannot_reach_privileged_dashboards() {
        let session = SessionFactory::signed_in(Role::Public);
        let rbac = session.rbac();

        assert!(rbac.authorize_route("/dashboard").is_ok());
        assert_forbidden(rbac.authorize_route("/admin/dashboard"));
        assert_forbidden(rbac.authorize_route("/team/dashboard"));
    }

    #[test]
    fn test_every_menu_destination_is_reachable() {
        for role in Role::ALL {
            let session = SessionFactory::signed_in(role);
            let rbac = session.rbac();
            for entry in rbac.navigation() {
                assert!(
                    rbac.authorize_route(entry.destination).is_ok(),
                    "{} should reach {}",
                    role,
                    entry.destination
                );
            }
        }
    }
}
