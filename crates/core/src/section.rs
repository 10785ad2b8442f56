//! Section entity: a named grouping of questions within a template.

use serde::{Deserialize, Serialize};

use crate::question::Question;
use crate::types::EntityId;

/// A named grouping of questions.
///
/// Owned by the aggregate; the section in turn owns its questions.
/// Insertion order is significant and question ids are unique within
/// the section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Option<EntityId>,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl Section {
    /// Construct an empty section with a freshly assigned id.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Section {
            id: Some(EntityId::new_v4()),
            title: title.into(),
            description,
            questions: Vec::new(),
        }
    }
}
