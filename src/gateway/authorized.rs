//! Capability-enforcing gateway wrapper

use crate::auth::rbac::{self, Capability, EntityKind, RoleStore};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::types::{DataGateway, Record};

/// Gateway that checks the session's current role before every call
///
/// Denied calls fail with [`DashboardError::Forbidden`] and never reach the
/// inner gateway.
#[derive(Debug)]
pub struct AuthorizedGateway<G> {
    inner: G,
    store: Arc<RoleStore>,
}

impl<G: DataGateway> AuthorizedGateway<G> {
    pub fn new(inner: G, store: Arc<RoleStore>) -> Self {
        Self { inner, store }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    fn authorize(&self, capability: Capability, kind: EntityKind) -> Result<()> {
        let role = self.store.get_role();
        rbac::require(role, capability).inspect_err(|_| {
            warn!("Denied {} on {} for role {}", capability, kind, role);
        })
    }

    fn authorize_delete(&self, kind: EntityKind) -> Result<()> {
        let role = self.store.get_role();
        if rbac::can_delete(role, kind) {
            return Ok(());
        }

        warn!("Denied delete on {} for role {}", kind, role);
        Err(DashboardError::forbidden(format!(
            "{} and {} are required to delete a {}, role {} lacks them",
            Capability::CanDelete,
            rbac::delete_capability(kind),
            kind,
            role
        )))
    }
}

#[async_trait]
impl<G: DataGateway> DataGateway for AuthorizedGateway<G> {
    async fn list(&self, kind: EntityKind) -> Result<Vec<Record>> {
        self.authorize(Capability::CanRead, kind)?;
        self.inner.list(kind).await
    }

    async fn get(&self, kind: EntityKind, id: Uuid) -> Result<Record> {
        self.authorize(Capability::CanRead, kind)?;
        self.inner.get(kind, id).await
    }

    async fn create(&self, kind: EntityKind, data: serde_json::Value) -> Result<Record> {
        self.authorize(Capability::CanCreate, kind)?;
        self.inner.create(kind, data).await
    }

    async fn update(&self, kind: EntityKind, id: Uuid, data: serde_json::Value) -> Result<Record> {
        self.authorize(Capability::CanUpdate, kind)?;
        self.inner.update(kind, id, data).await
    }

    async fn delete(&self, kind: EntityKind, id: Uuid) -> Result<()> {
        self.authorize_delete(kind)?;
        self.inner.delete(kind, id).await
    }
}
