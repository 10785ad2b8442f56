//! Question entity and its value objects.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Closed set of question kinds.
///
/// Purely descriptive for the aggregate: the lifecycle rules never branch
/// on the type. Serde enforces the closed set at the API edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    Text,
    Number,
    Date,
    Time,
    Datetime,
    Boolean,
    Dropdown,
}

/// One selectable choice on a choice-type question.
///
/// A value object: no identity, equality by field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
    pub order: u32,
}

/// A single survey prompt, owned by a [`crate::section::Section`].
///
/// Identity is the id: two questions with the same id are the same
/// logical question even if every other field differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Option<EntityId>,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Option<Vec<QuestionOption>>,
    pub is_required: bool,
}

impl Question {
    /// Construct a question with a freshly assigned id.
    pub fn new(
        text: impl Into<String>,
        question_type: QuestionType,
        options: Option<Vec<QuestionOption>>,
        is_required: bool,
    ) -> Self {
        Question {
            id: Some(EntityId::new_v4()),
            text: text.into(),
            question_type,
            options,
            is_required,
        }
    }
}
