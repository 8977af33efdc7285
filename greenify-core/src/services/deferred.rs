//! Delayed work bound to the lifetime of a view
//!
//! A chat reply or an identification result arrives some time after the user
//! asked for it. If the view that asked is gone by then, the result must not
//! be delivered. [`ViewScope`] owns a cancellation signal; every task it
//! defers races its delay against that signal, and dropping the scope fires
//! it.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Owner of deferred tasks for one view. Dropping it cancels them all.
#[derive(Debug)]
pub struct ViewScope {
    cancel: watch::Sender<bool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        let (cancel, _) = watch::channel(false);
        Self { cancel }
    }

    /// Run `work` after `delay` unless the scope is cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn defer<T, F>(&self, delay: Duration, work: F) -> Deferred<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let cancelled = cancelled(self.cancel.subscribe());
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled => None,
                _ = tokio::time::sleep(delay) => Some(work()),
            }
        });
        Deferred { handle }
    }

    /// Cancel every pending task, including ones deferred later
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Resolves once the flag turns true or the scope is gone
fn cancelled(mut rx: watch::Receiver<bool>) -> impl Future<Output = ()> + Send {
    async move {
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

/// Handle to one deferred task
#[derive(Debug)]
pub struct Deferred<T> {
    handle: JoinHandle<Option<T>>,
}

impl<T> Deferred<T> {
    /// The task's result, or `None` if it was cancelled
    pub async fn wait(self) -> Option<T> {
        self.handle.await.ok().flatten()
    }
}
