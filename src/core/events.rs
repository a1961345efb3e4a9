//! Scan event stream shared by every scanner.
//!
//! Events are generated by a single scan task and delivered in generation
//! order. A run ends with exactly one terminal event: `Completed` on payload
//! exhaustion, `Stopped` on cancellation, or `Error` for a precondition
//! violation. Transient per-request `Error` events do not end the stream.

use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Operator-facing progress text.
    Info(String),
    /// One issued request that got a response.
    Probe { status: u16, target: String },
    /// Heuristic positive signal for a payload or credential pair.
    Finding { payload: String, message: String },
    /// Precondition violation or transient request failure.
    Error(String),
    /// Cancelled before payload exhaustion.
    Stopped,
    /// All payloads attempted.
    Completed,
}

/// Sending half of a scan's event stream.
///
/// Cloneable so the scan loop can hand it to helpers; the receiving half
/// lives in the `ScanHandle`. A dropped receiver does not stop the scan.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<ScanEvent>,
}

impl EventSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ScanEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn emit(&self, event: ScanEvent) {
        // The caller may have dropped the handle mid-run; the scan finishes
        // on its own either way.
        let _ = self.tx.send(event);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.emit(ScanEvent::Info(text.into()));
    }

    pub fn probe(&self, status: u16, target: impl Into<String>) {
        self.emit(ScanEvent::Probe {
            status,
            target: target.into(),
        });
    }

    pub fn finding(&self, payload: impl Into<String>, message: impl Into<String>) {
        self.emit(ScanEvent::Finding {
            payload: payload.into(),
            message: message.into(),
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.emit(ScanEvent::Error(text.into()));
    }
}
