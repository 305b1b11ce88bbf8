//! Background task coordination.
//!
//! A run executes on the tokio runtime while the coordinating side (the CLI,
//! or whatever UI embeds the library) owns a [`BackgroundTask`]. Everything
//! the worker wants the coordinator to see travels as a [`SplitEvent`] over
//! an unbounded channel, delivered in the order it was posted. The
//! coordinator talks back through exactly one value: the cancellation flag.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::progress::{RunStatus, SplitOutcome, SplitProgress};

/// Monotonic one-shot cancellation flag shared between the coordinating side
/// and the worker. Once set it stays set for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Event delivered to the coordinating side.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitEvent {
    Progress(SplitProgress),
    /// Terminal event, sent exactly once after the worker returns.
    Done(SplitOutcome),
}

/// Worker-side handle for posting events and observing cancellation.
#[derive(Clone)]
pub struct WorkerContext {
    events: mpsc::UnboundedSender<SplitEvent>,
    cancel: CancelFlag,
}

impl WorkerContext {
    /// Post an event to the coordinating side. Events from one worker arrive
    /// in the order they were posted. A coordinator that has gone away just
    /// drops the event; the worker keeps running until it observes the
    /// cancellation flag.
    pub fn post(&self, event: SplitEvent) {
        let _ = self.events.send(event);
    }

    pub fn progress(&self, progress: SplitProgress) {
        self.post(SplitEvent::Progress(progress));
    }

    pub fn is_canceled(&self) -> bool {
        self.cancel.is_canceled()
    }

    pub fn cancel_flag(&self) -> &CancelFlag {
        &self.cancel
    }
}

/// Coordinator-side handle for one background run.
pub struct BackgroundTask {
    cancel: CancelFlag,
    events: mpsc::UnboundedReceiver<SplitEvent>,
}

impl BackgroundTask {
    /// Request cancellation. The worker observes the flag with at most one
    /// polling interval of delay.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Receive the next event. Returns `None` after the terminal
    /// [`SplitEvent::Done`] has been consumed and the worker is gone.
    pub async fn next_event(&mut self) -> Option<SplitEvent> {
        self.events.recv().await
    }
}

/// Run `work` in the background, converting its result into the terminal
/// outcome.
///
/// Failures inside the worker are caught here, at the outermost scope, and
/// reported as [`SplitOutcome::Failed`] carrying the error's display text;
/// nothing propagates across the channel as a panic or a raw error.
pub fn run_in_background<F, Fut>(work: F) -> BackgroundTask
where
    F: FnOnce(WorkerContext) -> Fut + Send + 'static,
    Fut: Future<Output = Result<RunStatus>> + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let cancel = CancelFlag::new();
    let ctx = WorkerContext {
        events: tx.clone(),
        cancel: cancel.clone(),
    };

    tokio::spawn(async move {
        let outcome = match work(ctx).await {
            Ok(RunStatus::Completed) => SplitOutcome::Completed,
            Ok(RunStatus::Canceled) => SplitOutcome::Canceled,
            Err(e) => SplitOutcome::Failed(e.to_string()),
        };
        debug!("background task finished: {outcome:?}");
        let _ = tx.send(SplitEvent::Done(outcome));
    });

    BackgroundTask { cancel, events: rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;

    #[tokio::test]
    async fn test_events_arrive_in_order_with_done_last() {
        let mut task = run_in_background(|ctx| async move {
            for i in 1..=3 {
                ctx.progress(SplitProgress {
                    seconds_done: i as f64,
                    segment_index: i,
                    segment_count: 3,
                });
            }
            Ok(RunStatus::Completed)
        });

        let mut events = Vec::new();
        while let Some(event) = task.next_event().await {
            events.push(event);
        }

        assert_eq!(events.len(), 4);
        for (i, event) in events.iter().take(3).enumerate() {
            match event {
                SplitEvent::Progress(p) => assert_eq!(p.segment_index, i + 1),
                other => panic!("expected progress, got {other:?}"),
            }
        }
        assert_eq!(events[3], SplitEvent::Done(SplitOutcome::Completed));
    }

    #[tokio::test]
    async fn test_worker_error_becomes_failed_outcome() {
        let mut task = run_in_background(|_ctx| async move {
            Err(SplitError::ExternalStep("boom".to_string()))
        });

        match task.next_event().await {
            Some(SplitEvent::Done(SplitOutcome::Failed(msg))) => {
                assert!(msg.contains("boom"));
            }
            other => panic!("expected failed outcome, got {other:?}"),
        }
        assert!(task.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_flag_is_visible_to_worker() {
        let (done_tx, done_rx) = tokio::sync::oneshot::channel();
        let mut task = run_in_background(|ctx| async move {
            let mut done_tx = Some(done_tx);
            loop {
                if ctx.is_canceled() {
                    if let Some(tx) = done_tx.take() {
                        let _ = tx.send(());
                    }
                    return Ok(RunStatus::Canceled);
                }
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
        });

        task.cancel();
        done_rx.await.unwrap();
        match task.next_event().await {
            Some(SplitEvent::Done(SplitOutcome::Canceled)) => {}
            other => panic!("expected canceled outcome, got {other:?}"),
        }
    }
}
