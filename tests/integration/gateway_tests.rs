//! Authorizing gateway integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_forbidden;
    use crate::common::{RecordFactory, SessionFactory};
    use async_trait::async_trait;
    use certboard::{
        AuthorizedGateway, DataGateway, EntityKind, InMemoryGateway, Record, Result, Role,
    };
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    mock! {
        pub Backend {}

        #[async_trait]
        impl DataGateway for Backend {
            async fn list(&self, kind: EntityKind) -> Result<Vec<Record>>;
            async fn get(&self, kind: EntityKind, id: Uuid) -> Result<Record>;
            async fn create(&self, kind: EntityKind, data: serde_json::Value) -> Result<Record>;
            async fn update(&self, kind: EntityKind, id: Uuid, data: serde_json::Value) -> Result<Record>;
            async fn delete(&self, kind: EntityKind, id: Uuid) -> Result<()>;
        }
    }

    fn record(kind: EntityKind, data: serde_json::Value) -> Record {
        let now = Utc::now();
        Record {
            id: Uuid::new_v4(),
            kind,
            data,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_denied_delete_never_reaches_backend() {
        let session = SessionFactory::signed_in(Role::Team);
        // No delete expectation: a call would panic
        let backend = MockBackend::new();
        let gateway = AuthorizedGateway::new(backend, session.store().clone());

        for kind in EntityKind::ALL {
            assert_forbidden(gateway.delete(kind, Uuid::new_v4()).await);
        }
    }

    #[tokio::test]
    async fn test_allowed_calls_are_forwarded() {
        let session = SessionFactory::signed_in(Role::Admin);
        let id = Uuid::new_v4();

        let mut backend = MockBackend::new();
        backend
            .expect_delete()
            .with(eq(EntityKind::Member), eq(id))
            .times(1)
            .returning(|_, _| Ok(()));
        backend
            .expect_create()
            .times(1)
            .returning(|kind, data| Ok(record(kind, data)));

        let gateway = AuthorizedGateway::new(backend, session.store().clone());
        let created = gateway
            .create(EntityKind::Certificate, RecordFactory::certificate())
            .await
            .unwrap();
        assert_eq!(created.kind, EntityKind::Certificate);

        gateway.delete(EntityKind::Member, id).await.unwrap();
    }

    #[tokio::test]
    async fn test_sign_out_revokes_delete() {
        let session = SessionFactory::anonymous_with_default(Role::Public);
        session.sign_in(Role::Admin);

        let gateway = AuthorizedGateway::new(InMemoryGateway::new(), session.store().clone());
        let keep = gateway
            .create(EntityKind::Category, RecordFactory::category())
            .await
            .unwrap();
        let removed = gateway
            .create(EntityKind::Category, RecordFactory::category())
            .await
            .unwrap();

        gateway.delete(EntityKind::Category, removed.id).await.unwrap();

        session.sign_out();
        assert_forbidden(gateway.delete(EntityKind::Category, keep.id).await);
        assert_eq!(gateway.list(EntityKind::Category).await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_team_workflow() {
        let session = SessionFactory::signed_in(Role::Team);
        let gateway = AuthorizedGateway::new(InMemoryGateway::new(), session.store().clone());

        let member = gateway
            .create(EntityKind::Member, RecordFactory::member())
            .await
            .unwrap();
        let template = gateway
            .create(EntityKind::Template, RecordFactory::template())
            .await
            .unwrap();

        let updated = gateway
            .update(
                EntityKind::Template,
                template.id,
                serde_json::json!({"name": "Renamed"}),
            )
            .await
            .unwrap();
        assert_eq!(updated.data["name"], "Renamed");

        assert_forbidden(gateway.delete(EntityKind::Member, member.id).await);
        assert_eq!(gateway.inner().len(), 2);
    }
}
