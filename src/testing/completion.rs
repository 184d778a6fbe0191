use std::sync::{Arc, Mutex, PoisonError};

use super::assertions::{AssertionMismatch, Outcome};

/// Recorder for assertion-helper callbacks.
///
/// Hand [`done`](Self::done) to a helper, then inspect what it reported:
///
/// ```no_run
/// # use lighter_campus::testing::{Completion, Harness};
/// # async fn example(server: &Harness) {
/// let completion = Completion::new();
/// server.post_for_not_found("/missing", completion.done(), serde_json::json!({}), "").await;
/// completion.assert_passed();
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Completion {
    calls: Arc<Mutex<Vec<Outcome>>>,
}

impl Completion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback recording every outcome it receives.
    pub fn done(&self) -> impl FnOnce(Outcome) + 'static {
        let calls = Arc::clone(&self.calls);

        move |outcome| {
            calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(outcome);
        }
    }

    /// Number of times a callback from this recorder was invoked.
    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// The first reported outcome.
    pub fn outcome(&self) -> Option<Outcome> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .first()
            .cloned()
    }

    /// Reported exactly once, with no failure.
    pub fn passed(&self) -> bool {
        self.calls() == 1 && matches!(self.outcome(), Some(Ok(())))
    }

    #[track_caller]
    pub fn assert_passed(&self) {
        assert_eq!(self.calls(), 1, "done should be called exactly once");

        if let Some(Err(mismatch)) = self.outcome() {
            panic!("expected the contract to hold: {mismatch}");
        }
    }

    /// Panics unless exactly one failure was reported, and returns it.
    #[track_caller]
    pub fn assert_failed(&self) -> AssertionMismatch {
        assert_eq!(self.calls(), 1, "done should be called exactly once");

        match self.outcome() {
            Some(Err(mismatch)) => mismatch,
            _ => panic!("expected the contract to fail"),
        }
    }
}
