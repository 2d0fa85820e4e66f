use gs_control::StreamEvent;

use std::convert::Infallible;
use std::time::Duration;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::mpsc;

/// Bridge a stream loop's channel to an SSE response.
///
/// Each event becomes one `data: <payload>` frame. When the client goes away
/// the response body, and with it `events`, is dropped, which stops the loop.
pub fn event_stream(
    events: mpsc::Receiver<StreamEvent>,
    keep_alive: Duration,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = futures::stream::unfold(events, |mut events| async move {
        let event = events.recv().await?;
        Some((Ok(Event::default().data(event.to_string())), events))
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(keep_alive))
}
