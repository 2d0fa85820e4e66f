use crate::stream_context::{StreamContext, Wake};
use crate::{
    CancelTopic, CancellationBus, EdgeTrigger, Metrics, PresenceSnapshot, RosterQuery,
    ShutdownCoordinator, StatusProber, StreamEnd, StreamEvent, StreamKind, StreamSettings,
};

use gs_core::Status;

use log::{debug, info, warn};
use tokio::sync::mpsc;

/// Opens per-connection polling loops.
///
/// Each loop keeps its own last-emitted baseline and stops as soon as the
/// receiver returned by [`open`](Self::open) is dropped.
#[derive(Clone)]
pub struct StreamBroadcaster {
    prober: StatusProber,
    roster: RosterQuery,
    bus: CancellationBus,
    shutdown: ShutdownCoordinator,
    settings: StreamSettings,
    metrics: Metrics,
}

impl StreamBroadcaster {
    pub fn new(
        prober: StatusProber,
        roster: RosterQuery,
        bus: CancellationBus,
        shutdown: ShutdownCoordinator,
        settings: StreamSettings,
        metrics: Metrics,
    ) -> Self {
        Self {
            prober,
            roster,
            bus,
            shutdown,
            settings,
            metrics,
        }
    }

    /// Start a stream loop and hand back its event channel.
    ///
    /// The bus subscription is taken before this returns, so a stop issued
    /// right after opening a start-wait still cancels it.
    pub fn open(&self, kind: StreamKind) -> mpsc::Receiver<StreamEvent> {
        let (sink, events) = mpsc::channel(self.settings.buffer_size.max(1));
        let context = StreamContext::new(
            sink,
            self.bus.subscribe(topics_for(kind)),
            self.shutdown.subscribe_guard(),
        );

        let broadcaster = self.clone();
        tokio::spawn(async move { broadcaster.drive(kind, context).await });

        events
    }

    async fn drive(self, kind: StreamKind, mut context: StreamContext) {
        info!("Stream {} opened ({})", context.id, kind);
        self.metrics.stream_opened(kind);

        let end = match kind {
            StreamKind::Status => self.run_status(&mut context).await,
            StreamKind::Presence => self.run_presence(&mut context).await,
            StreamKind::StartWait => self.run_start_wait(&mut context).await,
        };

        self.metrics.stream_closed(kind, end);
        info!("Stream {} closed ({}, {})", context.id, kind, end);
    }

    async fn run_status(&self, context: &mut StreamContext) -> StreamEnd {
        let mut trigger = EdgeTrigger::new();

        loop {
            match context.wait(self.settings.status_interval).await {
                Wake::Elapsed | Wake::Signalled(_) => {}
                Wake::Disconnected => return StreamEnd::Disconnected,
                Wake::Shutdown => return StreamEnd::Shutdown,
            }

            let status = match context.observe(self.prober.probe()).await {
                Ok(status) => status,
                Err(end) => return end,
            };

            if let Some(status) = trigger.observe(status)
                && !self.emit(context, StreamKind::Status, StreamEvent::Status(status)).await
            {
                return StreamEnd::Disconnected;
            }
        }
    }

    async fn run_presence(&self, context: &mut StreamContext) -> StreamEnd {
        let mut trigger = EdgeTrigger::new();
        let mut known_count = 0;

        loop {
            match context.wait(self.settings.status_interval).await {
                Wake::Elapsed | Wake::Signalled(_) => {}
                Wake::Disconnected => return StreamEnd::Disconnected,
                Wake::Shutdown => return StreamEnd::Shutdown,
            }

            let (status, roster_count) = match context.observe(self.presence_probe()).await {
                Ok(observed) => observed,
                Err(end) => return end,
            };

            // A healthy payload always carries a count; hold the last one
            // while the roster cannot be read
            let player_count = match (status, roster_count) {
                (Status::Healthy, Some(count)) => {
                    known_count = count;
                    Some(count)
                }
                (Status::Healthy, None) => {
                    warn!(
                        "Stream {}: roster unavailable, reporting last known count {}",
                        context.id, known_count
                    );
                    Some(known_count)
                }
                _ => None,
            };
            let snapshot = PresenceSnapshot {
                status,
                player_count,
            };

            if let Some(snapshot) = trigger.observe(snapshot)
                && !self
                    .emit(context, StreamKind::Presence, StreamEvent::Presence(snapshot))
                    .await
            {
                return StreamEnd::Disconnected;
            }
        }
    }

    async fn run_start_wait(&self, context: &mut StreamContext) -> StreamEnd {
        let mut trigger = EdgeTrigger::new();
        let mut period = self.settings.start_grace;

        loop {
            match context.wait(period).await {
                Wake::Elapsed => {}
                Wake::Signalled(_) => return self.cancel(context).await,
                Wake::Disconnected => return StreamEnd::Disconnected,
                Wake::Shutdown => return StreamEnd::Shutdown,
            }
            period = self.settings.start_poll_interval;

            let status = match context.observe(self.prober.probe()).await {
                Ok(status) => status,
                Err(end) => return end,
            };

            if let Some(changed) = trigger.observe(status)
                && !self.emit(context, StreamKind::StartWait, StreamEvent::Status(changed)).await
            {
                return StreamEnd::Disconnected;
            }

            if status == Status::Healthy {
                return StreamEnd::Completed;
            }
        }
    }

    /// Probe, plus the roster size when healthy and the roster is readable
    async fn presence_probe(&self) -> (Status, Option<usize>) {
        let status = self.prober.probe().await;
        let roster_count = if status == Status::Healthy {
            self.roster.roster_for(status).await.player_count()
        } else {
            None
        };

        (status, roster_count)
    }

    async fn cancel(&self, context: &StreamContext) -> StreamEnd {
        // The client may already be gone; the stream ends either way
        self.emit(context, StreamKind::StartWait, StreamEvent::Cancelled)
            .await;
        StreamEnd::Cancelled
    }

    async fn emit(&self, context: &StreamContext, kind: StreamKind, event: StreamEvent) -> bool {
        debug!("Stream {} -> {}", context.id, event);
        let delivered = context.emit(event).await;
        if delivered {
            self.metrics.event_emitted(kind);
        }
        delivered
    }
}

fn topics_for(kind: StreamKind) -> &'static [CancelTopic] {
    match kind {
        StreamKind::StartWait => &[CancelTopic::ServiceStopped],
        StreamKind::Status | StreamKind::Presence => {
            &[CancelTopic::ServiceStarted, CancelTopic::ServiceStopped]
        }
    }
}
