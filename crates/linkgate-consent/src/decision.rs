//! Consent decision model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Open this one link without remembering anything
    AllowOnce,
    /// Always open links for this domain
    AlwaysAllow,
    /// Never open links for this domain
    Deny,
}

impl Decision {
    /// Whether this decision is written to the store as a lasting rule
    pub fn is_durable(&self) -> bool {
        !matches!(self, Decision::AllowOnce)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::AllowOnce => "allow_once",
            Decision::AlwaysAllow => "always_allow",
            Decision::Deny => "deny",
        }
    }

    pub fn parse(value: &str) -> Option<Decision> {
        match value {
            "allow_once" => Some(Decision::AllowOnce),
            "always_allow" => Some(Decision::AlwaysAllow),
            "deny" => Some(Decision::Deny),
            _ => None,
        }
    }
}

/// A durable (domain, decision) pair as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub domain: String,
    pub decision: Decision,
}
