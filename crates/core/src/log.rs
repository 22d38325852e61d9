//! The append target exchanges and typing indicators are written to

use crate::exchange::Exchange;

/// Identity of one typing indicator
pub type IndicatorId = u64;

/// Log container a [`ChatWidget`](crate::ChatWidget) writes into
///
/// Calls are synchronous and never span an await point.
pub trait ChatLog {
    /// Insert a typing indicator and return its identity
    fn show_typing(&mut self) -> IndicatorId;

    /// Remove the indicator with this identity; unknown ids are ignored
    fn remove_typing(&mut self, id: IndicatorId);

    /// Append a settled exchange
    fn append_exchange(&mut self, exchange: Exchange);

    /// Bring the newest entry into view
    fn scroll_to_bottom(&mut self);
}

/// One visible row of the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Typing(IndicatorId),
    Exchange(Exchange),
}

/// In-memory log, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeLog {
    entries: Vec<LogEntry>,
    next_indicator: IndicatorId,
    scroll_requests: usize,
}

impl ExchangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Settled exchanges in the order they were appended
    pub fn exchanges(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter().filter_map(|entry| match entry {
            LogEntry::Exchange(exchange) => Some(exchange),
            LogEntry::Typing(_) => None,
        })
    }

    /// Number of indicators currently shown
    pub fn typing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, LogEntry::Typing(_)))
            .count()
    }

    /// How many times a scroll to the bottom was requested
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ChatLog for ExchangeLog {
    fn show_typing(&mut self) -> IndicatorId {
        let id = self.next_indicator;
        self.next_indicator += 1;
        self.entries.push(LogEntry::Typing(id));
        id
    }

    fn remove_typing(&mut self, id: IndicatorId) {
        self.entries
            .retain(|entry| !matches!(entry, LogEntry::Typing(existing) if *existing == id));
    }

    fn append_exchange(&mut self, exchange: Exchange) {
        self.entries.push(LogEntry::Exchange(exchange));
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::RespondResponse;

    #[test]
    fn test_remove_only_matching_indicator() {
        let mut log = ExchangeLog::new();
        let first = log.show_typing();
        let second = log.show_typing();
        assert_ne!(first, second);

        log.remove_typing(first);
        assert_eq!(log.entries(), &[LogEntry::Typing(second)]);

        log.remove_typing(first);
        assert_eq!(log.typing_count(), 1);
    }

    #[test]
    fn test_exchanges_skip_indicators() {
        let mut log = ExchangeLog::new();
        let id = log.show_typing();
        log.append_exchange(Exchange::from_response("q", RespondResponse::new("b", "f")));

        assert_eq!(log.len(), 2);
        assert_eq!(log.exchanges().count(), 1);

        log.remove_typing(id);
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
    }
}
