use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::event::CustomerEvent;

/// Consumer half of the in-process event queue.
pub type EventReceiver = mpsc::UnboundedReceiver<CustomerEvent>;

/// Publishes domain events after a mutation has been committed.
///
/// Publishing is best-effort: implementations log delivery failures and never
/// surface them, so a broken consumer cannot fail a workflow whose state
/// change already happened.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: CustomerEvent);
}

/// Publisher backed by an in-process unbounded queue.
///
/// Sends never block the caller. Cloning yields another handle onto the same
/// queue.
#[derive(Debug, Clone)]
pub struct QueuePublisher {
    tx: mpsc::UnboundedSender<CustomerEvent>,
}

/// Creates a connected publisher/receiver pair.
pub fn queue() -> (QueuePublisher, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (QueuePublisher { tx }, rx)
}

impl EventPublisher for QueuePublisher {
    fn publish(&self, event: CustomerEvent) {
        let event_type = event.event_type();
        match self.tx.send(event) {
            Ok(()) => {
                metrics::counter!("customer_events_published_total").increment(1);
                tracing::debug!(event_type, "Published customer event");
            }
            Err(err) => {
                metrics::counter!("customer_events_dropped_total").increment(1);
                tracing::warn!(
                    event_type,
                    customer_id = %err.0.customer_id(),
                    "Dropped customer event: no active subscriber"
                );
            }
        }
    }
}

/// Publisher that discards every event. Useful where no consumer exists,
/// such as benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPublisher;

impl EventPublisher for NullPublisher {
    fn publish(&self, _event: CustomerEvent) {}
}

/// Drains the queue on a background task, logging each event.
///
/// Stands in for downstream consumers (notifications, read models) that would
/// subscribe in a larger deployment. The task ends when every publisher
/// handle has been dropped.
pub fn spawn_subscriber(mut rx: EventReceiver) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            tracing::info!(
                event_type = event.event_type(),
                customer_id = %event.customer_id(),
                occurred_at = %event.occurred_at(),
                "Customer event received"
            );
        }
        tracing::debug!("Event subscriber stopped: all publishers dropped");
    })
}
