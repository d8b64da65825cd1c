//! In-process gateway

use crate::auth::EntityKind;
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use super::types::{DataGateway, Record};

/// Gateway keeping records in a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    records: DashMap<Uuid, Record>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all kinds
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn ensure_object(data: &serde_json::Value) -> Result<()> {
        if data.is_object() {
            Ok(())
        } else {
            Err(DashboardError::validation("record data must be a JSON object"))
        }
    }

    fn missing(kind: EntityKind, id: Uuid) -> DashboardError {
        DashboardError::not_found(format!("{} {}", kind, id))
    }
}

#[async_trait]
impl DataGateway for InMemoryGateway {
    async fn list(&self, kind: EntityKind) -> Result<Vec<Record>> {
        let mut records: Vec<Record> = self
            .records
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }

    async fn get(&self, kind: EntityKind, id: Uuid) -> Result<Record> {
        self.records
            .get(&id)
            .filter(|r| r.kind == kind)
            .map(|r| r.value().clone())
            .ok_or_else(|| Self::missing(kind, id))
    }

    async fn create(&self, kind: EntityKind, data: serde_json::Value) -> Result<Record> {
        Self::ensure_object(&data)?;

        let now = Utc::now();
        let record = Record {
            id: Uuid::new_v4(),
            kind,
            data,
            created_at: now,
            updated_at: now,
        };
        self.records.insert(record.id, record.clone());

        debug!("Created {} {}", kind, record.id);
        Ok(record)
    }

    async fn update(&self, kind: EntityKind, id: Uuid, data: serde_json::Value) -> Result<Record> {
        Self::ensure_object(&data)?;

        let mut entry = self
            .records
            .get_mut(&id)
            .filter(|r| r.kind == kind)
            .ok_or_else(|| Self::missing(kind, id))?;
        entry.data = data;
        entry.updated_at = Utc::now();

        debug!("Updated {} {}", kind, id);
        Ok(entry.value().clone())
    }

    async fn delete(&self, kind: EntityKind, id: Uuid) -> Result<()> {
        self.records
            .remove_if(&id, |_, r| r.kind == kind)
            .map(|_| debug!("Deleted {} {}", kind, id))
            .ok_or_else(|| Self::missing(kind, id))
    }
}
