use futures::future::{abortable, AbortHandle, Aborted};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(800);

/// Handle to a pending delayed load.
pub struct LoadHandle {
    abort: AbortHandle,
    task: JoinHandle<bool>,
}

impl LoadHandle {
    /// Stops the load; its callback will not run afterwards.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    /// Waits for the load to end. `true` when the callback ran.
    pub async fn finished(self) -> bool {
        match self.task.await {
            Ok(delivered) => delivered,
            Err(err) => {
                tracing::warn!(error = %err, "delayed load task failed");
                false
            }
        }
    }
}

/// Runs `load` after `delay` and hands its result to `on_loaded`, unless the
/// returned handle is cancelled first. Must be called inside a tokio runtime.
pub fn load_after<T, L, F>(delay: Duration, load: L, on_loaded: F) -> LoadHandle
where
    T: Send + 'static,
    L: FnOnce() -> T + Send + 'static,
    F: FnOnce(T) + Send + 'static,
{
    let (pending, abort) = abortable(async move {
        tokio::time::sleep(delay).await;
        load()
    });
    let guard = abort.clone();

    let task = tokio::spawn(async move {
        match pending.await {
            Ok(value) if !guard.is_aborted() => {
                on_loaded(value);
                true
            }
            Ok(_) | Err(Aborted) => {
                tracing::debug!("delayed load cancelled before delivery");
                false
            }
        }
    });

    LoadHandle { abort, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    #[tokio::test(start_paused = true)]
    async fn delivers_after_delay() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let handle = load_after(DEFAULT_LOAD_DELAY, || 42, move |value| {
            let _ = tx.send(value);
        });
        assert!(handle.finished().await);
        assert_eq!(rx.await.unwrap(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_load_never_calls_back() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();
        let handle = load_after(
            Duration::from_millis(800),
            || "categories",
            move |_| flag.store(true, Ordering::SeqCst),
        );
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(!handle.finished().await);
        assert!(!called.load(Ordering::SeqCst));
    }
}
