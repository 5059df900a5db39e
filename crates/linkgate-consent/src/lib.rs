//! LinkGate Consent Rules
//!
//! Durable mapping from domain to a remembered decision. Only stable,
//! repeatable decisions are persisted; an allow-once is a one-off and
//! clears any rule instead of creating one.

mod decision;
mod store;

pub use decision::{Decision, Rule};
pub use store::{ConsentStore, RuleStore};

pub type Result<T> = std::result::Result<T, linkgate_storage::StorageError>;
