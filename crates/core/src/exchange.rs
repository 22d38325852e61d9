//! Wire types for the respond endpoint and the exchange they produce

use crate::config::WidgetMessages;
use crate::error::RespondError;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/respond`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondRequest {
    pub message: String,
}

impl RespondRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondResponse {
    pub biased: String,
    pub fair: String,
    #[serde(default)]
    pub bias_note: Option<String>,

    // Classification the backend attaches; informational only
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl RespondResponse {
    /// Response with just the required fields
    pub fn new(biased: impl Into<String>, fair: impl Into<String>) -> Self {
        Self {
            biased: biased.into(),
            fair: fair.into(),
            bias_note: None,
            topic: None,
            region: None,
            gender: None,
            nationality: None,
        }
    }

    pub fn with_bias_note(mut self, note: impl Into<String>) -> Self {
        self.bias_note = Some(note.into());
        self
    }

    fn context(&self) -> Vec<String> {
        [&self.topic, &self.region, &self.gender, &self.nationality]
            .into_iter()
            .flatten()
            .filter(|tag| !tag.is_empty() && tag.as_str() != "unspecified")
            .cloned()
            .collect()
    }
}

/// Body of a non-success response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// One user message paired with its biased/fair answer
///
/// Exchanges are never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub user_text: String,
    /// Empty when the request failed
    pub biased: String,
    pub fair: String,
    /// Empty when the backend gave no explanation
    pub bias_note: String,
    /// Classification tags, empty unless the backend sent some
    pub context: Vec<String>,
}

impl Exchange {
    /// Build the exchange for a successful response
    pub fn from_response(user_text: impl Into<String>, response: RespondResponse) -> Self {
        let context = response.context();
        Self {
            user_text: user_text.into(),
            biased: response.biased,
            fair: response.fair,
            bias_note: response.bias_note.unwrap_or_default(),
            context,
        }
    }

    /// Build the exchange shown in place of a failed request
    pub fn from_error(
        user_text: impl Into<String>,
        error: &RespondError,
        messages: &WidgetMessages,
    ) -> Self {
        let fair = match error {
            RespondError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            RespondError::Http { message: None, .. } => messages.generic_error.clone(),
            RespondError::Transport(_) => messages.network_error.clone(),
        };

        Self {
            user_text: user_text.into(),
            biased: String::new(),
            fair,
            bias_note: String::new(),
            context: Vec::new(),
        }
    }

    /// Settle a request outcome into an exchange
    pub fn settle(
        user_text: impl Into<String>,
        outcome: Result<RespondResponse, RespondError>,
        messages: &WidgetMessages,
    ) -> Self {
        match outcome {
            Ok(response) => Self::from_response(user_text, response),
            Err(error) => Self::from_error(user_text, &error, messages),
        }
    }

    pub fn has_bias_note(&self) -> bool {
        !self.bias_note.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.biased.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(RespondRequest::new("hello")).unwrap();
        assert_eq!(body, json!({"message": "hello"}));
    }

    #[test]
    fn test_response_without_note() {
        let response: RespondResponse =
            serde_json::from_value(json!({"biased": "X", "fair": "Y"})).unwrap();
        let exchange = Exchange::from_response("q", response);

        assert_eq!(exchange.biased, "X");
        assert_eq!(exchange.fair, "Y");
        assert!(!exchange.has_bias_note());
        assert!(exchange.context.is_empty());
    }

    #[test]
    fn test_response_with_null_note() {
        let response: RespondResponse =
            serde_json::from_value(json!({"biased": "X", "fair": "Y", "bias_note": null})).unwrap();
        assert_eq!(response.bias_note, None);
    }

    #[test]
    fn test_response_missing_fair_rejected() {
        let result = serde_json::from_value::<RespondResponse>(json!({"biased": "X"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_context_skips_unspecified() {
        let response: RespondResponse = serde_json::from_value(json!({
            "biased": "X",
            "fair": "Y",
            "bias_note": "Z",
            "topic": "salary",
            "region": "pakistan",
            "gender": "unspecified",
            "nationality": "Pakistani"
        }))
        .unwrap();
        let exchange = Exchange::from_response("q", response);

        assert_eq!(exchange.bias_note, "Z");
        assert_eq!(exchange.context, vec!["salary", "pakistan", "Pakistani"]);
    }

    #[test]
    fn test_http_error_uses_server_message() {
        let messages = WidgetMessages::default();
        let error = RespondError::http(500, Some("quota exceeded".to_string()));
        let exchange = Exchange::from_error("q", &error, &messages);

        assert_eq!(exchange.fair, "quota exceeded");
        assert_eq!(exchange.biased, "");
        assert_eq!(exchange.bias_note, "");
        assert!(exchange.is_error());
    }

    #[test]
    fn test_http_error_without_message_uses_fallback() {
        let messages = WidgetMessages::default();
        let exchange = Exchange::from_error("q", &RespondError::http(502, None), &messages);
        assert_eq!(exchange.fair, "Something went wrong.");
    }

    #[test]
    fn test_transport_error_uses_network_text() {
        let messages = WidgetMessages::default();
        let exchange = Exchange::settle("q", Err(RespondError::transport("refused")), &messages);
        assert_eq!(exchange.fair, "Network error. Please try again.");
        assert_eq!(exchange.biased, "");
    }
}
