//! In-memory persistence for the surveyforge service.
//!
//! [`TemplateStore`] is an explicit arena of template aggregates keyed by
//! id, with its lifecycle owned by whoever constructs it (the server
//! binary or a test harness) -- there is no module-level state.
//!
//! All mutation flows through a [`UnitOfWork`] obtained from
//! [`TemplateStore::begin`], which holds the arena's write lock for its
//! whole lifetime. That lock is the single-writer-per-aggregate
//! discipline the domain layer relies on: two concurrent mutations can
//! never load stale copies of the same aggregate and silently lose one
//! write.

mod store;
mod uow;

pub use store::TemplateStore;
pub use uow::UnitOfWork;
