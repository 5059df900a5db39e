//! LinkGate Core
//!
//! Central coordination layer for the LinkGate consent gate. Thin
//! shells (link dispatch, share sheet, rules screen) route everything
//! through [`LinkGate`] and render whatever it decides.

mod config;
mod error;
mod gate;

pub use config::Config;
pub use error::CoreError;
pub use gate::LinkGate;

// Re-export core components
pub use linkgate_consent::{ConsentStore, Decision, Rule, RuleStore};
pub use linkgate_flow::{
    extract_domain, extract_first_url, ConsentFlow, FlowAction, FlowError,
};
pub use linkgate_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
