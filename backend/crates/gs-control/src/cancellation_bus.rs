use crate::{CancelTopic, CancellationGuard, Metrics};

use tokio::sync::broadcast;

/// Room for signals a slow subscriber has not consumed yet
const BUS_CAPACITY: usize = 16;

/// Process-wide fan-out of lifecycle signals.
///
/// Not a queue: only guards that exist when a signal is sent observe it.
/// Dropping a guard releases its subscription.
#[derive(Clone)]
pub struct CancellationBus {
    tx: broadcast::Sender<CancelTopic>,
    metrics: Metrics,
}

impl CancellationBus {
    pub fn new(metrics: Metrics) -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        Self { tx, metrics }
    }

    /// Wake every current subscriber of `topic`. Returns how many guards
    /// were registered at the time.
    pub fn signal(&self, topic: CancelTopic) -> usize {
        // Err only means nobody is listening
        let receivers = self.tx.send(topic).unwrap_or(0);
        log::debug!("Signalled {} to {} subscriber(s)", topic, receivers);
        self.metrics.signal_published(topic.as_str(), receivers);
        receivers
    }

    /// Register interest in `topics`. Signals sent before this call are not
    /// delivered.
    pub fn subscribe(&self, topics: &[CancelTopic]) -> CancellationGuard {
        CancellationGuard::new(self.tx.subscribe(), topics)
    }

    /// Live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CancellationBus {
    fn default() -> Self {
        Self::new(Metrics::new())
    }
}
