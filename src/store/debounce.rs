//! Query debouncing.
//!
//! A [`QueryDebouncer`] holds back query text until it has been stable for
//! the configured delay. Pushing new text replaces the pending text and
//! restarts the timer, so the most recent query always wins. Typical use is
//! a `tokio::select!` loop racing input events against
//! [`settled`](QueryDebouncer::settled):
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(text) = input.recv() => debouncer.push(text),
//!         Some(query) = debouncer.settled() => store.set_query(query),
//!     }
//! }
//! ```

use std::time::Duration;

use log::trace;
use tokio::time::{sleep_until, Instant};

#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `text`, superseding anything still pending.
    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        let deadline = Instant::now() + self.delay;
        if let Some((previous, _)) = &self.pending {
            trace!("query `{previous}` superseded by `{text}`");
        }
        self.pending = Some((text, deadline));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending text without emitting it.
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|(text, _)| text)
    }

    /// Take the pending text if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.cancel(),
            _ => None,
        }
    }

    /// Wait for the pending text to settle. Resolves to `None` immediately
    /// when nothing is pending, so it is safe to race in a select loop
    /// (a `None` arm simply does not match). Cancel-safe: dropping the
    /// future leaves the pending text in place.
    pub async fn settled(&mut self) -> Option<String> {
        let deadline = self.pending.as_ref().map(|(_, deadline)| *deadline)?;
        sleep_until(deadline).await;
        self.cancel()
    }
}
