//! Widget configuration
//!
//! Every field has a default so a host page can embed a partial JSON
//! document and only override what it needs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default path of the respond endpoint
pub const DEFAULT_ENDPOINT: &str = "/api/respond";

/// Top-level widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Origin the endpoint is resolved against; empty means same origin
    pub base_url: String,
    /// Path of the respond endpoint
    pub endpoint: String,
    /// Presentation strategy for exchanges
    pub layout: Layout,
    /// Preset prompts rendered as example chips
    pub examples: Vec<String>,
    /// Show the classification tags the backend attaches to a response
    pub show_context: bool,
    /// User-visible strings
    pub messages: WidgetMessages,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            layout: Layout::default(),
            examples: default_examples(),
            show_context: false,
            messages: WidgetMessages::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a (possibly partial) JSON configuration document
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Set the origin requests are sent to
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the presentation strategy
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

fn default_examples() -> Vec<String> {
    [
        "I'm a Pakistani woman applying for a software role. What salary should I ask for?",
        "I'm a German man. Will I get promoted faster?",
        "Does my accent matter in a job interview?",
        "Should I mention my visa status to recruiters?",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// How an exchange is laid out in the log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Chat bubbles stacked vertically
    #[default]
    Bubbles,
    /// Biased and fair cards side by side
    Cards,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bubbles => write!(f, "bubbles"),
            Self::Cards => write!(f, "cards"),
        }
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubbles" | "bubble" => Ok(Self::Bubbles),
            "cards" | "card" | "grid" => Ok(Self::Cards),
            _ => Err(UnknownLayout(s.to_string())),
        }
    }
}

/// Returned when a layout name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown layout: {0}")]
pub struct UnknownLayout(pub String);

/// User-visible strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetMessages {
    pub you_label: String,
    pub biased_label: String,
    pub fair_label: String,
    pub note_prefix: String,
    pub typing_label: String,
    pub typing_text: String,
    /// Shown when an error response carries no `error` field
    pub generic_error: String,
    /// Shown when no response was received
    pub network_error: String,
    pub placeholder: String,
    pub send_label: String,
}

impl Default for WidgetMessages {
    fn default() -> Self {
        Self {
            you_label: "You".to_string(),
            biased_label: "Biased response".to_string(),
            fair_label: "Fair response".to_string(),
            note_prefix: "Why it's biased:".to_string(),
            typing_label: "Bot".to_string(),
            typing_text: "Preparing contrasting responses...".to_string(),
            generic_error: "Something went wrong.".to_string(),
            network_error: "Network error. Please try again.".to_string(),
            placeholder: "Ask about hiring, pay or promotions".to_string(),
            send_label: "Send".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"layout": "cards", "messages": {"send_label": "Go"}}"#)
            .unwrap();

        assert_eq!(config.layout, Layout::Cards);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.messages.send_label, "Go");
        assert_eq!(config.messages.network_error, "Network error. Please try again.");
        assert!(!config.examples.is_empty());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_unknown_layout_rejected() {
        assert!(WidgetConfig::from_json(r#"{"layout": "tiles"}"#).is_err());
        assert_eq!(
            "tiles".parse::<Layout>(),
            Err(UnknownLayout("tiles".to_string()))
        );
    }

    #[test]
    fn test_layout_aliases() {
        assert_eq!(" Grid ".parse::<Layout>(), Ok(Layout::Cards));
        assert_eq!("bubble".parse::<Layout>(), Ok(Layout::Bubbles));
        assert_eq!(Layout::Cards.to_string(), "cards");
    }
}
