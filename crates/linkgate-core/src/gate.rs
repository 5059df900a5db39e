//! Main consent gate container

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::watch;

use linkgate_consent::{ConsentStore, Decision, Rule, RuleStore};
use linkgate_flow::{extract_first_url, ConsentFlow, FlowAction};
use linkgate_storage::Database;

use crate::config::Config;
use crate::Result;

/// Central state container for the consent gate.
///
/// Owns the database, the rule store, and the live consent flow; thin
/// shells route incoming links and user choices through here and render
/// whatever comes back.
pub struct LinkGate {
    config: Config,
    db: Database,
    rules: Arc<RuleStore>,
    flow: ConsentFlow,
}

impl LinkGate {
    /// Initialize a new gate instance
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    pub fn in_memory() -> Result<Self> {
        let config = Config {
            database_path: PathBuf::from(":memory:"),
        };
        Self::with_database(config, Database::open_in_memory()?)
    }

    fn with_database(config: Config, db: Database) -> Result<Self> {
        let rules = Arc::new(RuleStore::new(db.clone())?);
        let store: Arc<dyn ConsentStore> = rules.clone();
        let flow = ConsentFlow::new(store);

        tracing::info!(
            database = %config.database_path.display(),
            "Consent gate initialized"
        );

        Ok(Self {
            config,
            db,
            rules,
            flow,
        })
    }

    // === Incoming links ===

    pub async fn handle_url(&self, url: &str) -> Option<FlowAction> {
        self.flow.handle_url(url).await
    }

    /// Route a shared text blob through the gate.
    ///
    /// Returns `None` when the text contains no link; there is nothing
    /// to gate and the shell stays on its idle screen.
    pub async fn handle_shared_text(&self, text: &str) -> Option<FlowAction> {
        let url = extract_first_url(text)?.to_string();
        self.flow.handle_url(&url).await
    }

    // === User choices ===

    pub fn allow_once(&self) -> Option<FlowAction> {
        self.flow.allow_once()
    }

    pub async fn always_allow(&self) -> Result<Option<FlowAction>> {
        Ok(self.flow.always_allow().await?)
    }

    pub async fn deny(&self) -> Result<Option<FlowAction>> {
        Ok(self.flow.deny().await?)
    }

    // === Rules management ===

    pub async fn list_rules(&self) -> Result<Vec<Rule>> {
        Ok(self.rules.all_rules().await?)
    }

    /// Receiver for the rules screen; updated after every completed write.
    pub fn subscribe_rules(&self) -> watch::Receiver<Vec<Rule>> {
        self.rules.subscribe()
    }

    /// Forget the stored rule for a domain.
    pub async fn remove_rule(&self, domain: &str) -> Result<()> {
        Ok(self.rules.set_decision(domain, Decision::AllowOnce).await?)
    }

    // === Accessors ===

    pub fn flow(&self) -> &ConsentFlow {
        &self.flow
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
