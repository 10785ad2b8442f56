use crate::types::EntityId;

/// Everything the aggregate can reject.
///
/// Three kinds only: lookup misses, status-based rejections, and the
/// empty-template publish precondition. The aggregate never raises
/// anything else for input it accepts.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("{0}")]
    InvalidState(&'static str),

    #[error("Cannot publish an empty survey template")]
    EmptyTemplate,
}

impl TemplateError {
    pub fn template_not_found(id: EntityId) -> Self {
        TemplateError::NotFound {
            entity: "Template",
            id,
        }
    }

    pub fn section_not_found(id: EntityId) -> Self {
        TemplateError::NotFound {
            entity: "Section",
            id,
        }
    }

    pub fn question_not_found(id: EntityId) -> Self {
        TemplateError::NotFound {
            entity: "Question",
            id,
        }
    }
}
