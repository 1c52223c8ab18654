//! Serialized result intake for one screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::mvi::Reducer;

use super::machine::StateMachine;

/// Stop flag shared between a session and its consumer task.
#[derive(Clone)]
struct StopSignal {
    stopped: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    fn signal(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // without this, signal() could fire between the check and the await,
        // and notify_waiters() would have no subscribers, losing the notification.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.stopped.load(Ordering::SeqCst) {
            return;
        }
        notified.await;
    }
}

/// Owns a [`StateMachine`] plus the queue feeding it.
///
/// Producers on any task push results through [`sender`](Self::sender);
/// a single consumer task pops them in arrival order and dispatches each
/// one, so results from concurrent producers are folded one at a time.
pub struct ScreenSession<R: Reducer> {
    machine: StateMachine<R>,
    tx: mpsc::UnboundedSender<R::Result>,
    stop: StopSignal,
    task: JoinHandle<()>,
}

impl<R> ScreenSession<R>
where
    R: Reducer + Send + 'static,
{
    /// Start the consumer task for `machine`.
    pub fn spawn(machine: StateMachine<R>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<R::Result>();
        let stop = StopSignal::new();

        let consumer = machine.clone();
        let stop_task = stop.clone();
        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    // biased: a signaled stop wins over queued results.
                    biased;
                    _ = stop_task.wait() => break,
                    maybe = rx.recv() => match maybe {
                        Some(result) => consumer.dispatch(result),
                        None => break,
                    },
                }
            }
            tracing::debug!(session = %consumer.session_id(), "Result loop stopped");
        });

        Self {
            machine,
            tx,
            stop,
            task,
        }
    }

    /// Queue handle for producers. Sending fails once the session is gone.
    pub fn sender(&self) -> mpsc::UnboundedSender<R::Result> {
        self.tx.clone()
    }

    /// The machine behind this session, for subscriptions and snapshots.
    pub fn machine(&self) -> &StateMachine<R> {
        &self.machine
    }

    /// Stop accepting new results, fold everything already queued, then
    /// tear down subscriptions. Returns the final state.
    pub async fn drain(self) -> R::State {
        let Self {
            machine,
            tx,
            stop: _stop,
            task,
        } = self;
        drop(tx);
        if let Err(error) = task.await {
            tracing::warn!(error = %error, "Result loop task failed");
        }
        machine.dispose_all();
        machine.current()
    }

    /// Stop immediately, discarding any queued results.
    pub async fn shutdown(self) -> R::State {
        let Self {
            machine,
            tx,
            stop,
            task,
        } = self;
        stop.signal();
        drop(tx);
        if let Err(error) = task.await {
            tracing::warn!(error = %error, "Result loop task failed");
        }
        machine.dispose_all();
        machine.current()
    }
}
