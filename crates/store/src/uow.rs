use std::collections::{HashMap, HashSet};

use tokio::sync::OwnedRwLockWriteGuard;

use surveyforge_core::error::TemplateError;
use surveyforge_core::template::TemplateAggregate;
use surveyforge_core::types::EntityId;

/// One transactional scope over the template arena.
///
/// Holds the arena's write lock for its whole lifetime, so at most one
/// unit of work is in flight at a time. Writes are staged on a private
/// overlay; [`UnitOfWork::commit`] applies the overlay to the arena in
/// one step, and dropping without committing discards it (rollback).
pub struct UnitOfWork {
    arena: OwnedRwLockWriteGuard<HashMap<EntityId, TemplateAggregate>>,
    staged: HashMap<EntityId, TemplateAggregate>,
    removed: HashSet<EntityId>,
}

impl UnitOfWork {
    pub(crate) fn new(arena: OwnedRwLockWriteGuard<HashMap<EntityId, TemplateAggregate>>) -> Self {
        UnitOfWork {
            arena,
            staged: HashMap::new(),
            removed: HashSet::new(),
        }
    }

    /// Stage a new template, assigning it a fresh id.
    ///
    /// Returns the template as it will be persisted.
    pub fn create(&mut self, mut template: TemplateAggregate) -> TemplateAggregate {
        let id = EntityId::new_v4();
        template.id = Some(id);
        self.staged.insert(id, template.clone());
        template
    }

    /// Fetch one template, staged writes taking precedence.
    ///
    /// Fails explicitly on a miss -- never returns a silent empty value.
    pub fn get_by_id(&self, id: EntityId) -> Result<TemplateAggregate, TemplateError> {
        if self.removed.contains(&id) {
            return Err(TemplateError::template_not_found(id));
        }
        self.staged
            .get(&id)
            .or_else(|| self.arena.get(&id))
            .cloned()
            .ok_or_else(|| TemplateError::template_not_found(id))
    }

    /// All templates visible to this unit of work, oldest first.
    pub fn get_all(&self) -> Vec<TemplateAggregate> {
        let mut templates: Vec<_> = self
            .arena
            .iter()
            .filter(|(id, _)| !self.staged.contains_key(id) && !self.removed.contains(id))
            .map(|(_, t)| t.clone())
            .chain(self.staged.values().cloned())
            .collect();
        templates.sort_by_key(|t| t.created_at);
        templates
    }

    /// Stage an updated aggregate under its existing id.
    pub fn update(&mut self, template: TemplateAggregate) -> Result<TemplateAggregate, TemplateError> {
        // A template with no id was never created; it is not in the arena,
        // so report it the same way as any other miss.
        let id = template
            .id
            .ok_or_else(|| TemplateError::template_not_found(EntityId::nil()))?;
        // The id must refer to something this unit of work can see.
        self.get_by_id(id)?;
        self.staged.insert(id, template.clone());
        Ok(template)
    }

    /// Stage removal of a template. Returns whether the id was visible.
    pub fn delete(&mut self, id: EntityId) -> bool {
        let existed = self.get_by_id(id).is_ok();
        if existed {
            self.staged.remove(&id);
            self.removed.insert(id);
        }
        existed
    }

    /// Apply every staged write to the arena and release the lock.
    pub fn commit(mut self) {
        for id in self.removed.drain() {
            self.arena.remove(&id);
        }
        for (id, template) in self.staged.drain() {
            self.arena.insert(id, template);
        }
    }
}
