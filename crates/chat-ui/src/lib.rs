//! Yew components for the fairchat widget

pub mod components;
pub mod live_log;
pub mod render;
pub mod styles;

// Re-export main components
pub use components::{ChatForm, ChatWidget, ExampleChips, ExchangeLogView, TransportHandle};
pub use live_log::LiveLog;
pub use render::{BubbleRenderer, CardRenderer, ExchangeRenderer, renderer_for};
