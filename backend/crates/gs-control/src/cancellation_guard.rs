use crate::CancelTopic;

use tokio::sync::broadcast::{self, error::RecvError};

/// One subscription to the [`CancellationBus`](crate::CancellationBus)
pub struct CancellationGuard {
    rx: broadcast::Receiver<CancelTopic>,
    topics: Vec<CancelTopic>,
}

impl CancellationGuard {
    pub(crate) fn new(rx: broadcast::Receiver<CancelTopic>, topics: &[CancelTopic]) -> Self {
        Self {
            rx,
            topics: topics.to_vec(),
        }
    }

    /// Wait for the next signal of a subscribed topic.
    ///
    /// Never resolves once the bus is gone.
    pub async fn wait(&mut self) -> CancelTopic {
        loop {
            match self.rx.recv().await {
                Ok(topic) if self.topics.contains(&topic) => return topic,
                Ok(_) => continue,
                // Missed signals still mean something happened; report the
                // most conservative one we care about.
                Err(RecvError::Lagged(_)) => {
                    if let Some(topic) = self.fallback_topic() {
                        return topic;
                    }
                }
                Err(RecvError::Closed) => std::future::pending::<()>().await,
            }
        }
    }

    fn fallback_topic(&self) -> Option<CancelTopic> {
        if self.topics.contains(&CancelTopic::ServiceStopped) {
            Some(CancelTopic::ServiceStopped)
        } else {
            self.topics.first().copied()
        }
    }
}
