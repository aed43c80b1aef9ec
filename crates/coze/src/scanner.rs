use crate::body::text_from_full_body;
use crate::event::WorkflowEvent;
use crate::sse::{EventDecoder, LineBuffer, RawEvent, RawEventKind, preview};
use crate::types::TranscriptResult;

/// Incrementally scans a workflow response for the transcript.
///
/// Feed it body chunks as they arrive; once [`TranscriptScanner::feed`]
/// returns `true` the rest of the body can be dropped. [`TranscriptScanner::finish`]
/// then applies the full-body fallback if the stream produced no text.
#[derive(Debug, Default)]
pub struct TranscriptScanner {
    lines: LineBuffer,
    decoder: EventDecoder,
    body: Vec<u8>,
    saw_stream_frames: bool,
    state: ScanState,
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Reading,
    Found(String),
    Done,
}

impl TranscriptScanner {
    pub fn feed(&mut self, chunk: &[u8]) -> bool {
        if !matches!(self.state, ScanState::Reading) {
            return true;
        }

        self.body.extend_from_slice(chunk);
        for line in self.lines.push(chunk) {
            if self.scan_line(&line) {
                return true;
            }
        }
        false
    }

    pub fn finish(mut self) -> Option<TranscriptResult> {
        if matches!(self.state, ScanState::Reading) {
            if let Some(line) = self.lines.finish() {
                self.scan_line(&line);
            }
        }

        match self.state {
            ScanState::Found(text) => Some(TranscriptResult::from_stream(text)),
            ScanState::Reading | ScanState::Done if self.saw_stream_frames => {
                tracing::warn!(body_bytes = self.body.len(), "event_stream_without_text");
                None
            }
            ScanState::Reading | ScanState::Done => {
                let body = String::from_utf8_lossy(&self.body);
                tracing::debug!(body = %preview(&body), "falling_back_to_full_body");
                text_from_full_body(&body).map(TranscriptResult::from_full_body)
            }
        }
    }

    fn scan_line(&mut self, line: &str) -> bool {
        let Some(raw) = RawEvent::parse(line) else {
            return false;
        };
        if matches!(raw.kind, RawEventKind::EventName | RawEventKind::Data) {
            self.saw_stream_frames = true;
        }

        let Some(event) = self.decoder.push(raw) else {
            return false;
        };

        match WorkflowEvent::classify(&event) {
            Ok(WorkflowEvent::Message(Some(text))) => {
                tracing::info!(chars = text.chars().count(), "transcript_found_in_stream");
                self.state = ScanState::Found(text);
                true
            }
            Ok(WorkflowEvent::Message(None)) => false,
            Ok(WorkflowEvent::Done) => {
                tracing::debug!("workflow_done");
                self.state = ScanState::Done;
                true
            }
            Ok(WorkflowEvent::Error { code, message }) => {
                tracing::warn!(code = ?code, message = %message, "workflow_error_event");
                false
            }
            Ok(WorkflowEvent::Other(name)) => {
                tracing::trace!(event = ?name, "workflow_event_ignored");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed_event_skipped");
                false
            }
        }
    }
}

/// Scans a complete body in one go.
pub fn scan_body(body: &str) -> Option<TranscriptResult> {
    let mut scanner = TranscriptScanner::default();
    scanner.feed(body.as_bytes());
    scanner.finish()
}
