//! Core of the fairchat widget: exchange model, request lifecycle and the
//! seams the browser layer plugs into

pub mod config;
pub mod error;
pub mod escape;
pub mod exchange;
pub mod log;
pub mod transport;
pub mod widget;

pub use config::{Layout, WidgetConfig, WidgetMessages};
pub use error::{RespondError, RespondResult};
pub use escape::escape_html;
pub use exchange::{ErrorBody, Exchange, RespondRequest, RespondResponse};
pub use log::{ChatLog, ExchangeLog, IndicatorId, LogEntry};
pub use transport::RespondTransport;
pub use widget::{ChatWidget, InputField};
