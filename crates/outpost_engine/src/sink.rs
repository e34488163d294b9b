//! Narration output channel.
//!
//! Turns and the antagonist ticker both write to the same sink. Each message
//! travels as one `String`, so concurrent writers never interleave inside a
//! message.

use tokio::sync::mpsc;
use tracing::debug;

/// Receiving half of an [`OutputSink`].
pub type NarrationReceiver = mpsc::UnboundedReceiver<String>;

/// Thread-safe writer of whole narration messages.
#[derive(Clone, Debug)]
pub struct OutputSink {
    tx: mpsc::UnboundedSender<String>,
}

impl OutputSink {
    /// Creates a sink and the receiver that drains it.
    #[must_use]
    pub fn channel() -> (Self, NarrationReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// A sink whose receiver is already gone. Every emit is dropped.
    #[must_use]
    pub fn disconnected() -> Self {
        let (sink, _) = Self::channel();
        sink
    }

    /// Writes one message. Returns `false` once the receiver is gone.
    pub fn emit(&self, message: impl Into<String>) -> bool {
        let delivered = self.tx.send(message.into()).is_ok();
        if !delivered {
            debug!("narration receiver closed; message dropped");
        }
        delivered
    }

    /// Whether the receiver has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
