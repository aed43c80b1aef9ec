//! Line-level decoding of the workflow's event-stream responses.
//!
//! The upstream speaks a loose dialect of server-sent events: `id:`, `event:`
//! and `data:` lines, with blank lines separating frames. Anything else is
//! treated as a garbled line and skipped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEventKind {
    Id,
    EventName,
    Data,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub kind: RawEventKind,
    pub payload: String,
}

impl RawEvent {
    /// Classifies a single protocol line. Returns `None` for lines that carry
    /// none of the known prefixes.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();

        let (kind, payload) = if line.is_empty() {
            (RawEventKind::Blank, "")
        } else if let Some(rest) = line.strip_prefix("id:") {
            (RawEventKind::Id, rest)
        } else if let Some(rest) = line.strip_prefix("event:") {
            (RawEventKind::EventName, rest)
        } else if let Some(rest) = line.strip_prefix("data:") {
            (RawEventKind::Data, rest)
        } else {
            return None;
        };

        Some(Self {
            kind,
            payload: payload.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StreamEvent {
    pub event_name: Option<String>,
    pub data: Option<String>,
}

impl StreamEvent {
    pub fn is_named(&self, name: &str) -> bool {
        self.event_name.as_deref() == Some(name)
    }
}

/// Folds raw lines into [`StreamEvent`]s.
///
/// An event is emitted every time a non-empty `data:` line is attached to the
/// current frame, so a frame with several data lines yields several events,
/// all carrying the frame's event name.
#[derive(Debug, Default)]
pub struct EventDecoder {
    current_event_name: Option<String>,
    current_data: Option<String>,
}

impl EventDecoder {
    pub fn push_line(&mut self, line: &str) -> Option<StreamEvent> {
        match RawEvent::parse(line) {
            Some(raw) => self.push(raw),
            None => {
                tracing::debug!(line = %preview(line), "sse_line_skipped");
                None
            }
        }
    }

    pub fn push(&mut self, raw: RawEvent) -> Option<StreamEvent> {
        match raw.kind {
            RawEventKind::Id => None,
            RawEventKind::Blank => {
                self.current_event_name = None;
                self.current_data = None;
                None
            }
            RawEventKind::EventName => {
                self.current_event_name = Some(raw.payload);
                self.current_data = None;
                None
            }
            RawEventKind::Data => {
                if raw.payload.is_empty() {
                    return None;
                }
                self.current_data = Some(raw.payload);
                Some(StreamEvent {
                    event_name: self.current_event_name.clone(),
                    data: self.current_data.clone(),
                })
            }
        }
    }
}

pub struct Events<I> {
    lines: I,
    decoder: EventDecoder,
}

impl<I, S> Iterator for Events<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = StreamEvent;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if let Some(event) = self.decoder.push_line(line.as_ref()) {
                return Some(event);
            }
        }
        None
    }
}

/// Lazily decodes a sequence of lines into events, preserving arrival order.
pub fn decode_lines<I>(lines: I) -> Events<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Events {
        lines: lines.into_iter(),
        decoder: EventDecoder::default(),
    }
}

/// Splits an incoming byte stream into lines. Handles `\n` and `\r\n`
/// terminators and lines that straddle chunk boundaries.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let mut line: Vec<u8> = self.pending.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// Returns the trailing unterminated line, if any.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.pending);
        Some(String::from_utf8_lossy(&rest).into_owned())
    }
}

pub(crate) fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 200;
    text.chars().take(MAX_CHARS).collect()
}
