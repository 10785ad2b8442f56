//! Domain layer for the surveyforge authoring service.
//!
//! Contains the [`template::TemplateAggregate`] lifecycle state machine,
//! its owned entities ([`section::Section`], [`question::Question`]) and
//! value objects, and the [`error::TemplateError`] taxonomy. This crate
//! has no knowledge of HTTP or storage; those layers live in
//! `surveyforge-api` and `surveyforge-store`.

pub mod error;
pub mod question;
pub mod section;
pub mod template;
pub mod types;
