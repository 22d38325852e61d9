mod chat_form;
mod chat_widget;
mod example_chips;
mod exchange_log;

pub use chat_form::{ChatForm, InputHandle};
pub use chat_widget::{ChatWidget, TransportHandle};
pub use example_chips::ExampleChips;
pub use exchange_log::ExchangeLogView;
