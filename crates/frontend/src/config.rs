//! Page-level configuration
//!
//! The host page may embed a JSON document in
//! `<script type="application/json" id="fairchat-config">`. Widget settings
//! sit at the top level next to the page settings below.

use anyhow::{Context, Result};
use fairchat_core::{Layout, WidgetConfig};
use serde::Deserialize;
use tracing::warn;
use web_sys::{UrlSearchParams, window};

pub const CONFIG_ELEMENT_ID: &str = "fairchat-config";

pub const TITLE: &str = "Bias In, Bias Out: Understanding Discrimination in Conversational AI";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    /// Filter directive for the console logger, e.g. "debug" or "fairchat_core=debug"
    pub log_level: String,
    #[serde(flatten)]
    pub widget: WidgetConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            log_level: "info".to_string(),
            widget: WidgetConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("malformed fairchat-config document")
    }

    /// Read the embedded document; absent means defaults
    pub fn load() -> Result<Self> {
        match embedded_document() {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    /// Apply what only the running page knows: its origin and query string
    pub fn resolve(mut self) -> Self {
        if self.widget.base_url.is_empty() {
            self.widget.base_url = page_origin();
        }
        if let Some(raw) = query_param("layout") {
            match raw.parse::<Layout>() {
                Ok(layout) => self.widget.layout = layout,
                Err(e) => warn!(error = %e, "Ignoring layout query parameter"),
            }
        }
        self
    }
}

fn embedded_document() -> Option<String> {
    window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Origin of the page, or empty when there is no window
fn page_origin() -> String {
    window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_fields_at_top_level() {
        let config = PageConfig::from_json(
            r#"{"log_level": "debug", "layout": "cards", "endpoint": "/v2/respond", "examples": []}"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.title, TITLE);
        assert_eq!(config.widget.layout, Layout::Cards);
        assert_eq!(config.widget.endpoint, "/v2/respond");
        assert!(config.widget.examples.is_empty());
    }

    #[test]
    fn test_malformed_document_reports_context() {
        let err = PageConfig::from_json("{ layout: cards").unwrap_err();
        assert!(err.to_string().contains("malformed fairchat-config"));
    }
}
