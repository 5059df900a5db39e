//! Consent flow state machine

use parking_lot::Mutex;
use std::sync::Arc;

use linkgate_consent::{ConsentStore, Decision};

use crate::action::FlowAction;
use crate::domain::extract_domain;
use crate::Result;

/// Transient per-interaction state. Overwritten by each new URL, never
/// persisted. The generation counter identifies the latest interaction
/// so a slow rule lookup can detect that it has been superseded.
#[derive(Debug, Default)]
struct Session {
    url: Option<String>,
    domain: Option<String>,
    generation: u64,
}

/// Per-interaction orchestration over the consent store.
///
/// One logical interaction is live at a time; a new URL replaces it
/// (last write wins) and any in-flight lookup for the previous URL is
/// discarded when it resolves.
pub struct ConsentFlow {
    store: Arc<dyn ConsentStore>,
    session: Mutex<Session>,
}

impl ConsentFlow {
    pub fn new(store: Arc<dyn ConsentStore>) -> Self {
        Self {
            store,
            session: Mutex::new(Session::default()),
        }
    }

    /// Normalized domain of the live interaction, if any.
    pub fn current_domain(&self) -> Option<String> {
        self.session.lock().domain.clone()
    }

    /// Raw URL of the live interaction, if any.
    pub fn current_url(&self) -> Option<String> {
        self.session.lock().url.clone()
    }

    /// Route an incoming URL.
    ///
    /// The rule lookup completes before any outcome is emitted. Returns
    /// `None` when a newer URL superseded this one while the lookup was
    /// in flight; the stale outcome is never delivered.
    pub async fn handle_url(&self, url: &str) -> Option<FlowAction> {
        let domain = extract_domain(url);

        let generation = {
            let mut session = self.session.lock();
            session.generation += 1;
            session.url = Some(url.to_string());
            session.domain = domain.clone();
            session.generation
        };

        let Some(domain) = domain else {
            // No domain to consult a rule for; the user still gets a
            // gate, labelled with the raw input.
            return Some(FlowAction::ShowGate(url.to_string()));
        };

        let decision = match self.store.decision_for(&domain).await {
            Ok(decision) => decision,
            Err(e) => {
                // Fail open to the gate, never to auto-allow
                tracing::warn!(%domain, error = %e, "Rule lookup failed, showing gate");
                None
            }
        };

        if self.session.lock().generation != generation {
            tracing::debug!(%domain, "Discarding stale rule lookup");
            return None;
        }

        match decision {
            Some(Decision::AlwaysAllow) => Some(FlowAction::OpenInBrowser(url.to_string())),
            Some(Decision::Deny) => Some(FlowAction::NavigateBlocked(domain)),
            // A stored allow-once should not exist; treat it as absent
            Some(Decision::AllowOnce) | None => Some(FlowAction::ShowGate(domain)),
        }
    }

    /// Open the current URL without remembering anything.
    ///
    /// No-op when no interaction is live.
    pub fn allow_once(&self) -> Option<FlowAction> {
        let url = self.session.lock().url.clone()?;
        Some(FlowAction::OpenInBrowser(url))
    }

    /// Remember the current domain as always allowed, then open.
    ///
    /// The rule is durable before the outcome is emitted. No-op when no
    /// interaction is live or the session has no domain.
    pub async fn always_allow(&self) -> Result<Option<FlowAction>> {
        let (url, domain) = {
            let session = self.session.lock();
            match (&session.url, &session.domain) {
                (Some(url), Some(domain)) => (url.clone(), domain.clone()),
                _ => return Ok(None),
            }
        };

        self.store
            .set_decision(&domain, Decision::AlwaysAllow)
            .await?;

        Ok(Some(FlowAction::OpenInBrowser(url)))
    }

    /// Remember the current domain as denied and report it blocked.
    ///
    /// Same durability and no-op semantics as [`ConsentFlow::always_allow`].
    pub async fn deny(&self) -> Result<Option<FlowAction>> {
        let domain = {
            let session = self.session.lock();
            if session.url.is_none() {
                return Ok(None);
            }
            match &session.domain {
                Some(domain) => domain.clone(),
                None => return Ok(None),
            }
        };

        self.store.set_decision(&domain, Decision::Deny).await?;

        Ok(Some(FlowAction::NavigateBlocked(domain)))
    }
}
