//! Command layer: the closed set of mutating requests and their dispatch.
//!
//! [`TemplateCommand`] is a sum type over the five command kinds, routed
//! by one exhaustive `match` in [`dispatch`] -- a missing handler is a
//! compile error, not a runtime lookup failure. Each arm loads the
//! aggregate (except create), invokes exactly one aggregate operation,
//! stages the update and commits. No business logic lives here.
//!
//! Any error short-circuits before [`UnitOfWork::commit`], so the unit of
//! work is dropped and its staged writes are discarded.
//!
//! [`UnitOfWork::commit`]: surveyforge_store::UnitOfWork::commit

use surveyforge_core::error::TemplateError;
use surveyforge_core::question::{Question, QuestionOption, QuestionType};
use surveyforge_core::section::Section;
use surveyforge_core::template::TemplateAggregate;
use surveyforge_core::types::EntityId;
use surveyforge_store::TemplateStore;

/// A mutating request against one template aggregate.
#[derive(Debug)]
pub enum TemplateCommand {
    CreateTemplate {
        title: String,
        description: Option<String>,
    },
    PublishTemplate {
        template_id: EntityId,
    },
    AddSection {
        template_id: EntityId,
        title: String,
        description: Option<String>,
    },
    AddQuestion {
        template_id: EntityId,
        section_id: EntityId,
        text: String,
        question_type: QuestionType,
        options: Option<Vec<String>>,
        required: bool,
    },
    EditQuestion {
        template_id: EntityId,
        section_id: EntityId,
        question_id: EntityId,
        text: String,
        question_type: QuestionType,
        options: Option<Vec<String>>,
        required: bool,
    },
}

/// Execute a command and return the full updated aggregate snapshot.
pub async fn dispatch(
    store: &TemplateStore,
    command: TemplateCommand,
) -> Result<TemplateAggregate, TemplateError> {
    let mut uow = store.begin().await;

    let template = match command {
        TemplateCommand::CreateTemplate { title, description } => {
            uow.create(TemplateAggregate::new(title, description))
        }

        TemplateCommand::PublishTemplate { template_id } => {
            let mut template = uow.get_by_id(template_id)?;
            template.publish()?;
            uow.update(template)?
        }

        TemplateCommand::AddSection {
            template_id,
            title,
            description,
        } => {
            let mut template = uow.get_by_id(template_id)?;
            template.add_section(Section::new(title, description))?;
            uow.update(template)?
        }

        TemplateCommand::AddQuestion {
            template_id,
            section_id,
            text,
            question_type,
            options,
            required,
        } => {
            let mut template = uow.get_by_id(template_id)?;
            let question = Question::new(text, question_type, build_options(options), required);
            template.add_question(section_id, question)?;
            uow.update(template)?
        }

        TemplateCommand::EditQuestion {
            template_id,
            section_id,
            question_id,
            text,
            question_type,
            options,
            required,
        } => {
            let mut template = uow.get_by_id(template_id)?;
            let mut replacement =
                Question::new(text, question_type, build_options(options), required);
            replacement.id = Some(question_id);
            template.edit_question(section_id, question_id, replacement)?;
            uow.update(template)?
        }
    };

    uow.commit();
    Ok(template)
}

/// Expand plain option labels into ordered [`QuestionOption`] values.
fn build_options(options: Option<Vec<String>>) -> Option<Vec<QuestionOption>> {
    options.map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(order, label)| QuestionOption {
                value: label.clone(),
                label,
                order: order as u32,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use surveyforge_core::template::TemplateStatus;

    use super::*;

    async fn create_template(store: &TemplateStore, title: &str) -> TemplateAggregate {
        dispatch(
            store,
            TemplateCommand::CreateTemplate {
                title: title.into(),
                description: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_persisted_draft() {
        let store = TemplateStore::new();
        let template = create_template(&store, "Onboarding survey").await;

        assert!(template.id.is_some());
        assert_eq!(template.status, TemplateStatus::Draft);
        assert_eq!(store.get(template.id.unwrap()).await.unwrap(), template);
    }

    #[tokio::test]
    async fn test_publish_empty_template_fails_and_rolls_back() {
        let store = TemplateStore::new();
        let template = create_template(&store, "Empty").await;
        let id = template.id.unwrap();

        let err = dispatch(&store, TemplateCommand::PublishTemplate { template_id: id })
            .await
            .unwrap_err();

        assert_matches!(err, TemplateError::EmptyTemplate);
        assert_eq!(store.get(id).await.unwrap().status, TemplateStatus::Draft);
    }

    #[tokio::test]
    async fn test_publish_unknown_template_fails() {
        let store = TemplateStore::new();
        let err = dispatch(
            &store,
            TemplateCommand::PublishTemplate {
                template_id: EntityId::new_v4(),
            },
        )
        .await
        .unwrap_err();

        assert_matches!(err, TemplateError::NotFound { entity: "Template", .. });
    }

    #[tokio::test]
    async fn test_add_question_builds_ordered_options() {
        let store = TemplateStore::new();
        let template = create_template(&store, "T").await;
        let template_id = template.id.unwrap();

        let template = dispatch(
            &store,
            TemplateCommand::AddSection {
                template_id,
                title: "S".into(),
                description: None,
            },
        )
        .await
        .unwrap();
        let section_id = template.sections[0].id.unwrap();

        let template = dispatch(
            &store,
            TemplateCommand::AddQuestion {
                template_id,
                section_id,
                text: "Favorite color?".into(),
                question_type: QuestionType::SingleChoice,
                options: Some(vec!["Red".into(), "Blue".into()]),
                required: true,
            },
        )
        .await
        .unwrap();

        let question = &template.sections[0].questions[0];
        let options = question.options.as_ref().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Red");
        assert_eq!(options[0].value, "Red");
        assert_eq!(options[0].order, 0);
        assert_eq!(options[1].order, 1);
        assert!(question.is_required);
    }

    #[tokio::test]
    async fn test_add_question_unknown_section_leaves_template_unchanged() {
        let store = TemplateStore::new();
        let template = create_template(&store, "T").await;
        let template_id = template.id.unwrap();
        let before = store.get(template_id).await.unwrap();

        let err = dispatch(
            &store,
            TemplateCommand::AddQuestion {
                template_id,
                section_id: EntityId::new_v4(),
                text: "Q".into(),
                question_type: QuestionType::Text,
                options: None,
                required: false,
            },
        )
        .await
        .unwrap_err();

        assert_matches!(err, TemplateError::NotFound { entity: "Section", .. });
        assert_eq!(store.get(template_id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_edit_question_keeps_the_path_id() {
        let store = TemplateStore::new();
        let template = create_template(&store, "T").await;
        let template_id = template.id.unwrap();

        let template = dispatch(
            &store,
            TemplateCommand::AddSection {
                template_id,
                title: "S".into(),
                description: None,
            },
        )
        .await
        .unwrap();
        let section_id = template.sections[0].id.unwrap();

        let template = dispatch(
            &store,
            TemplateCommand::AddQuestion {
                template_id,
                section_id,
                text: "Old text".into(),
                question_type: QuestionType::Text,
                options: None,
                required: false,
            },
        )
        .await
        .unwrap();
        let question_id = template.sections[0].questions[0].id.unwrap();

        let template = dispatch(
            &store,
            TemplateCommand::EditQuestion {
                template_id,
                section_id,
                question_id,
                text: "New text".into(),
                question_type: QuestionType::Boolean,
                options: None,
                required: true,
            },
        )
        .await
        .unwrap();

        let question = &template.sections[0].questions[0];
        assert_eq!(question.id, Some(question_id));
        assert_eq!(question.text, "New text");
        assert_eq!(question.question_type, QuestionType::Boolean);
        assert_eq!(template.sections[0].questions.len(), 1);
    }

    #[tokio::test]
    async fn test_full_authoring_flow_over_commands() {
        let store = TemplateStore::new();
        let template = create_template(&store, "T").await;
        let template_id = template.id.unwrap();

        let template = dispatch(
            &store,
            TemplateCommand::AddSection {
                template_id,
                title: "S".into(),
                description: None,
            },
        )
        .await
        .unwrap();
        let section_id = template.sections[0].id.unwrap();

        dispatch(
            &store,
            TemplateCommand::AddQuestion {
                template_id,
                section_id,
                text: "Q1".into(),
                question_type: QuestionType::Text,
                options: None,
                required: false,
            },
        )
        .await
        .unwrap();

        let template = dispatch(
            &store,
            TemplateCommand::PublishTemplate { template_id },
        )
        .await
        .unwrap();
        assert_eq!(template.status, TemplateStatus::Published);

        // Further mutation is rejected and nothing is lost.
        let err = dispatch(
            &store,
            TemplateCommand::AddSection {
                template_id,
                title: "S2".into(),
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert_matches!(err, TemplateError::InvalidState(_));
        assert_eq!(store.get(template_id).await.unwrap().sections.len(), 1);
    }
}
