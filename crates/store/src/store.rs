use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use surveyforge_core::error::TemplateError;
use surveyforge_core::template::TemplateAggregate;
use surveyforge_core::types::EntityId;

use crate::uow::UnitOfWork;

/// Arena of template aggregates keyed by id.
///
/// Cheaply cloneable; clones share the same arena. Reads go through the
/// read lock directly, writes go through [`TemplateStore::begin`].
#[derive(Clone, Default)]
pub struct TemplateStore {
    templates: Arc<RwLock<HashMap<EntityId, TemplateAggregate>>>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a unit of work, taking the arena's write lock.
    ///
    /// Waits until every earlier unit of work has committed or been
    /// dropped. Mutations staged on the returned [`UnitOfWork`] become
    /// visible only on commit.
    pub async fn begin(&self) -> UnitOfWork {
        UnitOfWork::new(Arc::clone(&self.templates).write_owned().await)
    }

    /// Fetch a snapshot of one template.
    ///
    /// Fails explicitly on a miss; callers depend on the error to report
    /// not-found outcomes rather than treating absence as empty.
    pub async fn get(&self, id: EntityId) -> Result<TemplateAggregate, TemplateError> {
        self.templates
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| TemplateError::template_not_found(id))
    }

    /// Snapshot of all templates, oldest first.
    pub async fn list(&self) -> Vec<TemplateAggregate> {
        let mut templates: Vec<_> = self.templates.read().await.values().cloned().collect();
        templates.sort_by_key(|t| t.created_at);
        templates
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;
    use surveyforge_core::error::TemplateError;
    use surveyforge_core::template::TemplateAggregate;
    use surveyforge_core::types::EntityId;

    use super::TemplateStore;

    #[tokio::test]
    async fn test_get_unknown_id_fails_explicitly() {
        let store = TemplateStore::new();
        let missing = EntityId::new_v4();

        let err = store.get(missing).await.unwrap_err();
        assert_matches!(
            err,
            TemplateError::NotFound {
                entity: "Template",
                id
            } if id == missing
        );
    }

    #[tokio::test]
    async fn test_committed_template_is_visible_to_readers() {
        let store = TemplateStore::new();

        let mut uow = store.begin().await;
        let created = uow.create(TemplateAggregate::new("Customer survey", None));
        uow.commit();

        let fetched = store.get(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched.title, "Customer survey");
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_creation_time() {
        let store = TemplateStore::new();

        for title in ["first", "second", "third"] {
            let mut uow = store.begin().await;
            uow.create(TemplateAggregate::new(title, None));
            uow.commit();
        }

        let titles: Vec<_> = store.list().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_begin_serializes_writers() {
        let store = TemplateStore::new();
        let uow = store.begin().await;

        // A second unit of work must wait for the first to finish.
        let blocked = tokio::time::timeout(Duration::from_millis(50), store.begin()).await;
        assert!(blocked.is_err());

        drop(uow);
        let _uow = tokio::time::timeout(Duration::from_millis(50), store.begin())
            .await
            .expect("write lock should be free after drop");
    }
}
