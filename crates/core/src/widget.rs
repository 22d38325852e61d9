//! Capture, request and render lifecycle of the chat widget

use crate::config::WidgetMessages;
use crate::error::RespondError;
use crate::exchange::{Exchange, RespondRequest};
use crate::log::ChatLog;
use crate::transport::RespondTransport;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Text field a form submission reads from
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&self);
}

impl InputField for RefCell<String> {
    fn value(&self) -> String {
        self.borrow().clone()
    }

    fn clear(&self) {
        self.borrow_mut().clear();
    }
}

/// Drives one request per submission and renders its outcome into the log
///
/// Clones share the same transport and log, so overlapping submissions from
/// different event handlers append to one log in completion order.
pub struct ChatWidget<T: ?Sized, L> {
    transport: Rc<T>,
    log: Rc<RefCell<L>>,
    messages: Rc<WidgetMessages>,
}

impl<T: ?Sized, L> Clone for ChatWidget<T, L> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            log: Rc::clone(&self.log),
            messages: Rc::clone(&self.messages),
        }
    }
}

impl<T, L> ChatWidget<T, L>
where
    T: RespondTransport + ?Sized,
    L: ChatLog,
{
    pub fn new(transport: Rc<T>, log: Rc<RefCell<L>>, messages: WidgetMessages) -> Self {
        Self {
            transport,
            log,
            messages: Rc::new(messages),
        }
    }

    pub fn log(&self) -> &Rc<RefCell<L>> {
        &self.log
    }

    pub fn messages(&self) -> &WidgetMessages {
        &self.messages
    }

    /// Handle a form submission: the field is cleared before anything else
    pub async fn submit_form<I: InputField + ?Sized>(&self, input: &I) -> Option<Exchange> {
        let raw = input.value();
        input.clear();
        self.send_message(&raw).await
    }

    /// Handle a preset example trigger; no input field is involved
    pub async fn submit_example(&self, example: &str) -> Option<Exchange> {
        self.send_message(example).await
    }

    /// Send one message and append exactly one exchange for it
    ///
    /// Returns `None` without touching the log when `raw` is blank. Failures
    /// never escape: they settle into an exchange like any response.
    pub async fn send_message(&self, raw: &str) -> Option<Exchange> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let indicator = {
            let mut log = self.log.borrow_mut();
            let id = log.show_typing();
            log.scroll_to_bottom();
            id
        };
        debug!(indicator, len = trimmed.len(), "Sending message");

        let request = RespondRequest::new(trimmed);
        let outcome = self.transport.respond(&request).await;

        match &outcome {
            Ok(_) => debug!(indicator, "Response received"),
            Err(RespondError::Http { status, .. }) => {
                debug!(indicator, status = *status, "Endpoint returned an error");
            }
            Err(err) => warn!(indicator, error = %err, "Request failed"),
        }

        let exchange = Exchange::settle(request.message, outcome, &self.messages);

        let mut log = self.log.borrow_mut();
        log.remove_typing(indicator);
        log.append_exchange(exchange.clone());
        log.scroll_to_bottom();

        Some(exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RespondResult;
    use crate::exchange::RespondResponse;
    use crate::log::{ExchangeLog, LogEntry};
    use crate::transport::mock::MockRespondTransport;
    use async_trait::async_trait;
    use std::time::Duration;

    fn widget_with<T: RespondTransport>(transport: T) -> ChatWidget<T, ExchangeLog> {
        ChatWidget::new(
            Rc::new(transport),
            Rc::new(RefCell::new(ExchangeLog::new())),
            WidgetMessages::default(),
        )
    }

    #[tokio::test]
    async fn test_blank_input_is_noop() {
        let mut transport = MockRespondTransport::new();
        transport.expect_respond().never();
        let widget = widget_with(transport);

        for blank in ["", "   ", "\n\t  \r\n"] {
            assert_eq!(widget.send_message(blank).await, None);
        }

        let log = widget.log().borrow();
        assert!(log.is_empty());
        assert_eq!(log.scroll_requests(), 0);
    }

    #[tokio::test]
    async fn test_success_appends_exchange_and_removes_indicator() {
        let mut transport = MockRespondTransport::new();
        transport
            .expect_respond()
            .withf(|request| request.message == "hello there")
            .times(1)
            .returning(|_| Ok(RespondResponse::new("X", "Y").with_bias_note("Z")));
        let widget = widget_with(transport);

        let exchange = widget.send_message("  hello there \n").await.unwrap();

        assert_eq!(exchange.user_text, "hello there");
        assert_eq!(exchange.biased, "X");
        assert_eq!(exchange.fair, "Y");
        assert_eq!(exchange.bias_note, "Z");

        let log = widget.log().borrow();
        assert_eq!(log.entries(), &[LogEntry::Exchange(exchange)]);
        assert_eq!(log.typing_count(), 0);
        assert_eq!(log.scroll_requests(), 2);
    }

    #[tokio::test]
    async fn test_http_error_settles_into_exchange() {
        let mut transport = MockRespondTransport::new();
        transport
            .expect_respond()
            .returning(|_| Err(RespondError::http(500, Some("quota exceeded".to_string()))));
        let widget = widget_with(transport);

        let exchange = widget.send_message("anything").await.unwrap();

        assert_eq!(exchange.fair, "quota exceeded");
        assert_eq!(exchange.biased, "");
        assert_eq!(exchange.bias_note, "");
        assert_eq!(widget.log().borrow().typing_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_settles_into_exchange() {
        let mut transport = MockRespondTransport::new();
        transport
            .expect_respond()
            .returning(|_| Err(RespondError::transport("connection reset")));
        let widget = widget_with(transport);

        let exchange = widget.send_message("anything").await.unwrap();

        assert_eq!(exchange.fair, "Network error. Please try again.");
        assert_eq!(exchange.biased, "");
        assert_eq!(widget.log().borrow().exchanges().count(), 1);
    }

    #[tokio::test]
    async fn test_failure_does_not_block_next_submission() {
        let mut transport = MockRespondTransport::new();
        let mut calls = 0;
        transport.expect_respond().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(RespondError::transport("offline"))
            } else {
                Ok(RespondResponse::new("X", "Y"))
            }
        });
        let widget = widget_with(transport);

        let first = widget.send_message("one").await.unwrap();
        let second = widget.send_message("two").await.unwrap();

        assert!(first.is_error());
        assert!(!second.is_error());
        assert_eq!(widget.log().borrow().exchanges().count(), 2);
    }

    #[tokio::test]
    async fn test_form_submission_clears_input() {
        let mut transport = MockRespondTransport::new();
        transport
            .expect_respond()
            .times(1)
            .returning(|_| Ok(RespondResponse::new("X", "Y")));
        let widget = widget_with(transport);

        let input = RefCell::new("  typed text  ".to_string());
        let exchange = widget.submit_form(&input).await.unwrap();

        assert_eq!(exchange.user_text, "typed text");
        assert_eq!(input.value(), "");
    }

    #[tokio::test]
    async fn test_blank_form_submission_still_clears_input() {
        let mut transport = MockRespondTransport::new();
        transport.expect_respond().never();
        let widget = widget_with(transport);

        let input = RefCell::new("   ".to_string());
        assert_eq!(widget.submit_form(&input).await, None);
        assert_eq!(input.value(), "");
    }

    #[tokio::test]
    async fn test_example_matches_typed_submission() {
        let mut transport = MockRespondTransport::new();
        transport
            .expect_respond()
            .times(2)
            .returning(|request| Ok(RespondResponse::new(format!("b:{}", request.message), "f")));
        let widget = widget_with(transport);

        let input = RefCell::new("Does my accent matter?".to_string());
        let typed = widget.submit_form(&input).await;
        let example = widget.submit_example("Does my accent matter?").await;

        assert_eq!(typed, example);
    }

    /// Answers after a delay encoded in the message, e.g. `slow:50`
    struct DelayedTransport;

    #[async_trait(?Send)]
    impl RespondTransport for DelayedTransport {
        async fn respond(&self, request: &RespondRequest) -> RespondResult<RespondResponse> {
            let delay = request
                .message
                .rsplit(':')
                .next()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(RespondResponse::new("X", request.message.clone()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_requests_settle_in_completion_order() {
        let widget = widget_with(DelayedTransport);

        let inspect = async {
            tokio::task::yield_now().await;
            assert_eq!(widget.log().borrow().typing_count(), 2);

            tokio::time::sleep(Duration::from_millis(20)).await;
            let log = widget.log().borrow();
            assert_eq!(log.typing_count(), 1);
            assert_eq!(log.exchanges().count(), 1);
        };

        let (slow, fast, ()) = tokio::join!(
            widget.send_message("slow:50"),
            widget.send_message("fast:10"),
            inspect,
        );

        let log = widget.log().borrow();
        let order: Vec<_> = log.exchanges().map(|e| e.user_text.as_str()).collect();
        assert_eq!(order, vec!["fast:10", "slow:50"]);
        assert_eq!(log.typing_count(), 0);
        assert_eq!(slow.unwrap().fair, "slow:50");
        assert_eq!(fast.unwrap().fair, "fast:10");
    }
}
