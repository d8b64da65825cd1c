//! Gateway trait and record type

use crate::auth::EntityKind;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored dashboard record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub kind: EntityKind,
    /// Record fields; always a JSON object
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// CRUD access to dashboard records
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// All records of `kind`, oldest first
    async fn list(&self, kind: EntityKind) -> Result<Vec<Record>>;

    /// Fetch one record
    async fn get(&self, kind: EntityKind, id: Uuid) -> Result<Record>;

    /// Insert a record and return it
    async fn create(&self, kind: EntityKind, data: serde_json::Value) -> Result<Record>;

    /// Replace a record's fields
    async fn update(&self, kind: EntityKind, id: Uuid, data: serde_json::Value) -> Result<Record>;

    /// Remove a record
    async fn delete(&self, kind: EntityKind, id: Uuid) -> Result<()>;
}
