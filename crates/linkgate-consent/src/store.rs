//! Durable rule storage
//!
//! One row per domain. Reads are always fresh; the watch channel
//! additionally pushes the full rule list after every completed write so
//! a rules listing never needs to poll.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::OptionalExtension;
use tokio::sync::watch;

use linkgate_storage::Database;

use crate::decision::{Decision, Rule};
use crate::Result;

#[async_trait]
pub trait ConsentStore: Send + Sync {
    /// Stored decision for a domain, or `None` if no rule exists.
    async fn decision_for(&self, domain: &str) -> Result<Option<Decision>>;

    /// Record a decision. A durable decision upserts the rule for the
    /// domain; an allow-once deletes it.
    async fn set_decision(&self, domain: &str, decision: Decision) -> Result<()>;

    /// All durable rules in insertion order.
    async fn all_rules(&self) -> Result<Vec<Rule>>;
}

pub struct RuleStore {
    db: Database,
    rules_tx: watch::Sender<Vec<Rule>>,
}

impl RuleStore {
    pub fn new(db: Database) -> Result<Self> {
        let rules = load_rules(&db)?;
        let (rules_tx, _) = watch::channel(rules);

        Ok(Self { db, rules_tx })
    }

    /// Receiver that observes the rule list after every completed write.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Rule>> {
        self.rules_tx.subscribe()
    }

    fn publish(&self) -> Result<()> {
        let rules = load_rules(&self.db)?;
        self.rules_tx.send_replace(rules);
        Ok(())
    }
}

fn load_rules(db: &Database) -> Result<Vec<Rule>> {
    db.with_connection(|conn| {
        let mut stmt =
            conn.prepare("SELECT domain, decision FROM consent_rules ORDER BY rowid")?;

        let rules = stmt
            .query_map([], |row| {
                let domain: String = row.get(0)?;
                let value: String = row.get(1)?;
                Ok((domain, value))
            })?
            .filter_map(|r| r.ok())
            .filter_map(|(domain, value)| match Decision::parse(&value) {
                Some(decision) => Some(Rule { domain, decision }),
                None => {
                    // A corrupt row must not fail the rest of the listing
                    tracing::warn!(%domain, %value, "Skipping unparseable consent rule");
                    None
                }
            })
            .collect();

        Ok(rules)
    })
}

#[async_trait]
impl ConsentStore for RuleStore {
    async fn decision_for(&self, domain: &str) -> Result<Option<Decision>> {
        let value: Option<String> = self.db.with_connection(|conn| {
            Ok(conn
                .query_row(
                    "SELECT decision FROM consent_rules WHERE domain = ?1",
                    [domain],
                    |row| row.get(0),
                )
                .optional()?)
        })?;

        Ok(value.and_then(|value| {
            let decision = Decision::parse(&value);
            if decision.is_none() {
                tracing::warn!(%domain, %value, "Ignoring unparseable consent rule");
            }
            decision
        }))
    }

    async fn set_decision(&self, domain: &str, decision: Decision) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();

        self.db.with_connection(|conn| {
            if decision.is_durable() {
                conn.execute(
                    "INSERT INTO consent_rules (domain, decision, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?3)
                     ON CONFLICT(domain) DO UPDATE SET decision = ?2, updated_at = ?3",
                    rusqlite::params![domain, decision.as_str(), updated_at],
                )?;
            } else {
                // A one-off visit is not a lasting preference; it clears one
                conn.execute("DELETE FROM consent_rules WHERE domain = ?1", [domain])?;
            }
            Ok(())
        })?;

        self.publish()
    }

    async fn all_rules(&self) -> Result<Vec<Rule>> {
        load_rules(&self.db)
    }
}
