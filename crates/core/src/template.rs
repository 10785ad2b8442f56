//! The template aggregate: sole owner of lifecycle and structural-mutation
//! rules for a survey template and its nested sections/questions.
//!
//! Every mutator runs its guards before touching any state, so a rejected
//! call leaves the aggregate (including `updated_at`) exactly as it was.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::question::Question;
use crate::section::Section;
use crate::types::{EntityId, Timestamp};

/* --------------------------------------------------------------------------
Status
-------------------------------------------------------------------------- */

/// Template lifecycle status.
///
/// `Draft` is the initial state. `Published` and `Archived` are terminal
/// with respect to edits; there is no transition back to `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    Draft,
    Published,
    Archived,
}

/* --------------------------------------------------------------------------
Aggregate
-------------------------------------------------------------------------- */

/// The single consistency boundary for a survey template.
///
/// All structural changes to a template and its nested sections/questions
/// must pass through this type. The aggregate owns its sections and each
/// section owns its questions; nothing is shared or aliased externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateAggregate {
    pub id: Option<EntityId>,
    pub title: String,
    pub description: Option<String>,
    pub status: TemplateStatus,
    pub sections: Vec<Section>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TemplateAggregate {
    /// Construct a fresh draft with no sections.
    ///
    /// The id is unset until the store assigns one.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        TemplateAggregate {
            id: None,
            title: title.into(),
            description,
            status: TemplateStatus::Draft,
            sections: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Publish the template.
    ///
    /// Guards, checked in order: already published, archived, and the
    /// empty-template rule (at least one section must hold at least one
    /// question).
    pub fn publish(&mut self) -> Result<(), TemplateError> {
        if self.status == TemplateStatus::Published {
            return Err(TemplateError::InvalidState("Template is already published"));
        }

        if self.status == TemplateStatus::Archived {
            return Err(TemplateError::InvalidState(
                "Cannot publish an archived template",
            ));
        }

        if !self.sections.iter().any(|s| !s.questions.is_empty()) {
            return Err(TemplateError::EmptyTemplate);
        }

        self.status = TemplateStatus::Published;
        self.touch();
        Ok(())
    }

    /// Append a section.
    ///
    /// Order is the append position. Section ids are not de-duplicated;
    /// lookups hit the first match.
    pub fn add_section(&mut self, section: Section) -> Result<(), TemplateError> {
        self.can_edit()?;
        self.sections.push(section);
        self.touch();
        Ok(())
    }

    /// Append a question to the section identified by `section_id`.
    pub fn add_question(
        &mut self,
        section_id: EntityId,
        question: Question,
    ) -> Result<(), TemplateError> {
        self.can_edit()?;
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == Some(section_id))
            .ok_or_else(|| TemplateError::section_not_found(section_id))?;
        section.questions.push(question);
        self.touch();
        Ok(())
    }

    /// Replace the question identified by `question_id` wholesale.
    ///
    /// The replacement occupies the position the original held and keeps
    /// the original id, whatever id the replacement record carried.
    pub fn edit_question(
        &mut self,
        section_id: EntityId,
        question_id: EntityId,
        mut replacement: Question,
    ) -> Result<(), TemplateError> {
        self.can_edit()?;
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == Some(section_id))
            .ok_or_else(|| TemplateError::section_not_found(section_id))?;

        let slot = section
            .questions
            .iter_mut()
            .find(|q| q.id == Some(question_id))
            .ok_or_else(|| TemplateError::question_not_found(question_id))?;

        // Identity continuity: the stored id stays the original.
        replacement.id = Some(question_id);
        *slot = replacement;
        self.touch();
        Ok(())
    }

    /// Shared editability guard applied by every structural mutator.
    fn can_edit(&self) -> Result<(), TemplateError> {
        match self.status {
            TemplateStatus::Published => Err(TemplateError::InvalidState(
                "Cannot edit a published template",
            )),
            TemplateStatus::Archived => Err(TemplateError::InvalidState(
                "Cannot edit an archived template",
            )),
            TemplateStatus::Draft => Ok(()),
        }
    }

    /// Refresh `updated_at`, strictly.
    ///
    /// `Utc::now()` can return the same instant twice at coarse clock
    /// resolution; fall back to a one-microsecond bump so the timestamp
    /// strictly increases on every successful mutation.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
