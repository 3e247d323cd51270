use std::time::{Duration, Instant};

/// The single scheduled search, if any.
#[derive(Debug, Clone, PartialEq)]
struct PendingSearch {
    query: String,
    due: Instant,
}

/// Holds back search input until it has been idle for `window`.
/// Each keystroke replaces the pending search, so only the last query
/// of a burst ever runs.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<PendingSearch>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        SearchDebouncer {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Cancel any pending search and schedule `query` at `now + window`.
    pub fn keystroke(&mut self, query: &str, now: Instant) {
        self.pending = Some(PendingSearch {
            query: query.to_string(),
            due: now + self.window,
        });
    }

    /// Take the pending query once its quiescence window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending search becomes due, for driving a timer.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_window() {
        let start = Instant::now();
        let mut d = SearchDebouncer::new(Duration::from_millis(300));
        d.keystroke("rust", start);
        assert_eq!(d.poll(start + Duration::from_millis(299)), None);
        assert_eq!(d.poll(start + Duration::from_millis(300)), Some("rust".to_string()));
        assert!(!d.is_pending());
        assert_eq!(d.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn later_keystroke_restarts_window() {
        let start = Instant::now();
        let mut d = SearchDebouncer::new(Duration::from_millis(300));
        d.keystroke("r", start);
        d.keystroke("ru", start + Duration::from_millis(200));
        assert_eq!(d.poll(start + Duration::from_millis(350)), None);
        assert_eq!(d.deadline(), Some(start + Duration::from_millis(500)));
        assert_eq!(d.poll(start + Duration::from_millis(500)), Some("ru".to_string()));
    }

    #[test]
    fn cancel_drops_pending() {
        let start = Instant::now();
        let mut d = SearchDebouncer::new(Duration::from_millis(300));
        d.keystroke("x", start);
        d.cancel();
        assert_eq!(d.poll(start + Duration::from_secs(1)), None);
    }
}
