//! Custom test assertions

use certboard::{CapabilitySet, DashboardError};

/// Assertions for capability sets
pub trait CapabilityAssertions {
    /// Assert create/read/update granted and every delete flag denied
    fn assert_no_delete(&self);

    /// Assert every flag granted
    fn assert_full_access(&self);
}

impl CapabilityAssertions for CapabilitySet {
    fn assert_no_delete(&self) {
        assert!(self.can_create && self.can_read && self.can_update);
        assert!(
            !self.can_delete
                && !self.can_delete_certificate
                && !self.can_delete_template
                && !self.can_delete_member
                && !self.can_delete_category,
            "Expected no delete capability, got {:?}",
            self
        );
    }

    fn assert_full_access(&self) {
        let denied: Vec<_> = self.iter().filter(|(_, g)| !g).collect();
        assert!(denied.is_empty(), "Expected full access, denied: {:?}", denied);
    }
}

/// Assert a result failed with `Forbidden`
pub fn assert_forbidden<T: std::fmt::Debug>(result: certboard::Result<T>) {
    match result {
        Err(DashboardError::Forbidden(_)) => {}
        other => panic!("Expected Forbidden, got {:?}", other),
    }
}
