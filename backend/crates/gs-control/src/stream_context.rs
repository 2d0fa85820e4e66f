use crate::{CancelTopic, CancellationGuard, ShutdownGuard, StreamEnd, StreamEvent, StreamId};

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

/// What ended a wait between iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wake {
    Elapsed,
    Signalled(CancelTopic),
    Disconnected,
    Shutdown,
}

/// Everything one stream loop owns: its outbound channel and its
/// subscriptions. Dropping it releases all of them.
pub(crate) struct StreamContext {
    pub id: StreamId,
    sink: mpsc::Sender<StreamEvent>,
    signals: CancellationGuard,
    shutdown: ShutdownGuard,
}

impl StreamContext {
    pub fn new(
        sink: mpsc::Sender<StreamEvent>,
        signals: CancellationGuard,
        shutdown: ShutdownGuard,
    ) -> Self {
        Self {
            id: StreamId::new(),
            sink,
            signals,
            shutdown,
        }
    }

    /// Suspend for `period` unless the client leaves, the server shuts down
    /// or a subscribed signal arrives first.
    pub async fn wait(&mut self, period: Duration) -> Wake {
        if self.shutdown.is_triggered() {
            return Wake::Shutdown;
        }

        tokio::select! {
            biased;
            _ = self.sink.closed() => Wake::Disconnected,
            _ = self.shutdown.wait() => Wake::Shutdown,
            topic = self.signals.wait() => Wake::Signalled(topic),
            _ = tokio::time::sleep(period) => Wake::Elapsed,
        }
    }

    /// Drive `work` unless the client leaves or the server shuts down first,
    /// in which case `work` is dropped mid-flight and the reason returned.
    pub async fn observe<F: Future>(&mut self, work: F) -> Result<F::Output, StreamEnd> {
        tokio::select! {
            biased;
            _ = self.sink.closed() => Err(StreamEnd::Disconnected),
            _ = self.shutdown.wait() => Err(StreamEnd::Shutdown),
            output = work => Ok(output),
        }
    }

    /// Push an event to the client. False once the client is gone.
    pub async fn emit(&self, event: StreamEvent) -> bool {
        self.sink.send(event).await.is_ok()
    }
}
