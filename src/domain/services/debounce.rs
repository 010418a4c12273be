use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use tokio::time::Duration;

use crate::domain::models::Action;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;

const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);
const MIN_QUERY_CHARS: usize = 3;

/// Schedules a suggestion fetch once typing pauses. Each keystroke aborts the
/// previously scheduled task, so at most one fetch fires per pause.
pub struct Debouncer {
    tx: mpsc::UnboundedSender<Action>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Debouncer {
        return Debouncer {
            tx,
            delay: DEBOUNCE_DELAY,
            pending: None,
        };
    }

    #[cfg(test)]
    fn with_delay(tx: mpsc::UnboundedSender<Action>, delay: Duration) -> Debouncer {
        return Debouncer {
            tx,
            delay,
            pending: None,
        };
    }

    /// Call on every keystroke with the full query text.
    pub fn input_changed(&mut self, query: &str) {
        self.cancel();

        let query = query.trim().to_string();
        if query.chars().count() < MIN_QUERY_CHARS {
            return;
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            tx.send(Action::Suggest(query)).ok();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
