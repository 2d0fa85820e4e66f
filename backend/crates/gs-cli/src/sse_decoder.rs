/// Incremental decoder for `text/event-stream` bodies.
///
/// Chunks may split events anywhere, including inside a UTF-8 sequence or a
/// CRLF pair, so raw bytes are buffered and only complete events decoded.
/// Only `data` fields are surfaced; comments (keep-alives) and other fields
/// are dropped.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk; returns the payloads of every event it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(end) = event_end(&self.buffer) {
            let event: Vec<u8> = self.buffer.drain(..end).collect();
            if let Some(payload) = data_of(&String::from_utf8_lossy(&event)) {
                payloads.push(payload);
            }
        }
        payloads
    }
}

/// Offset just past the first blank line (`\n` or `\r\n`), if any.
fn event_end(buffer: &[u8]) -> Option<usize> {
    let mut line_start = 0;
    for (i, byte) in buffer.iter().enumerate() {
        if *byte != b'\n' {
            continue;
        }
        let line = &buffer[line_start..i];
        if line.is_empty() || line == b"\r" {
            return Some(i + 1);
        }
        line_start = i + 1;
    }
    None
}

fn data_of(event: &str) -> Option<String> {
    let lines: Vec<&str> = event
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|value| value.strip_prefix(' ').unwrap_or(value))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
