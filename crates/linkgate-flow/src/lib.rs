//! LinkGate Consent Flow
//!
//! Routes an incoming link through the consent gate:
//! 1. Extract and normalize the domain
//! 2. Consult the stored rules
//! 3. Tell the caller to open, block, or prompt
//!
//! The user's explicit choice flows back through the same controller and
//! is made durable before the outcome is emitted.

mod action;
mod domain;
mod error;
mod flow;
mod intake;

pub use action::FlowAction;
pub use domain::extract_domain;
pub use error::FlowError;
pub use flow::ConsentFlow;
pub use intake::extract_first_url;

pub type Result<T> = std::result::Result<T, FlowError>;
