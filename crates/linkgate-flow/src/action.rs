//! Flow outcomes delivered to the caller

use serde::{Deserialize, Serialize};

/// Directive emitted by the consent flow.
///
/// This is the entire vocabulary the presentation layer branches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum FlowAction {
    /// Dispatch the URL to the system browser and end the interaction
    OpenInBrowser(String),
    /// Present the blocked notice for a denied domain
    NavigateBlocked(String),
    /// Present the consent prompt. The label is the normalized domain,
    /// or the raw URL when no domain could be extracted.
    ShowGate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let action = FlowAction::ShowGate("example.com".to_string());
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"action":"show_gate","value":"example.com"}"#);

        let parsed: FlowAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
    }
}
