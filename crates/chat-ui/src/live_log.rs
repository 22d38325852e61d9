//! Log container backing the rendered widget

use fairchat_core::{ChatLog, Exchange, ExchangeLog, IndicatorId, LogEntry};
use yew::Callback;

/// [`ExchangeLog`] that announces every mutation
///
/// The change callback is how the owning component learns it must re-render;
/// it is invoked while the widget still holds the log borrowed, so it has to
/// defer any work that reads the log back.
pub struct LiveLog {
    log: ExchangeLog,
    on_change: Callback<()>,
}

impl LiveLog {
    pub fn new(on_change: Callback<()>) -> Self {
        Self {
            log: ExchangeLog::new(),
            on_change,
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        self.log.entries()
    }

    pub fn scroll_requests(&self) -> usize {
        self.log.scroll_requests()
    }
}

impl ChatLog for LiveLog {
    fn show_typing(&mut self) -> IndicatorId {
        let id = self.log.show_typing();
        self.on_change.emit(());
        id
    }

    fn remove_typing(&mut self, id: IndicatorId) {
        self.log.remove_typing(id);
        self.on_change.emit(());
    }

    fn append_exchange(&mut self, exchange: Exchange) {
        self.log.append_exchange(exchange);
        self.on_change.emit(());
    }

    fn scroll_to_bottom(&mut self) {
        self.log.scroll_to_bottom();
        self.on_change.emit(());
    }
}
