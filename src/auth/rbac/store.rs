//! Session-wide current role

use tokio::sync::watch;
use tracing::{debug, info};

use super::types::Role;

/// Holds the current role of one session
///
/// The role lives in a single watch channel, so every reader observes the
/// latest `set_role` as soon as it returns. Share it with `Arc<RoleStore>`.
#[derive(Debug)]
pub struct RoleStore {
    current: watch::Sender<Role>,
}

impl RoleStore {
    /// Create a store holding `initial`
    pub fn new(initial: Role) -> Self {
        debug!("Creating role store with initial role {}", initial);
        let (current, _) = watch::channel(initial);
        Self { current }
    }

    /// Current role
    pub fn get_role(&self) -> Role {
        *self.current.borrow()
    }

    /// Replace the current role
    ///
    /// Returns `false` without notifying subscribers when `role` is already
    /// current.
    pub fn set_role(&self, role: Role) -> bool {
        let mut previous = role;
        let changed = self.current.send_if_modified(|current| {
            if *current == role {
                return false;
            }
            previous = std::mem::replace(current, role);
            true
        });

        if changed {
            info!("Role changed from {} to {}", previous, role);
        } else {
            debug!("Role already {}, ignoring set_role", role);
        }
        changed
    }

    /// Receiver that wakes on every effective role change
    ///
    /// Consumers caching permissions or navigation must drop their cache when
    /// the receiver reports a change.
    pub fn subscribe(&self) -> watch::Receiver<Role> {
        self.current.subscribe()
    }
}

impl Default for RoleStore {
    fn default() -> Self {
        Self::new(Role::default())
    }
}
