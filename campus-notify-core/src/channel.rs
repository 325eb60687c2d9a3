//! Simulated delivery channels.
//!
//! A channel never talks to a real transport: `deliver` writes one formatted
//! line to an [`OutputSink`]. Alerts compose the subset of channels they need
//! by holding them behind `Arc<dyn Channel>`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChannelKind {
    Sms,
    Email,
    Push,
}

impl ChannelKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Sms => "SMS",
            ChannelKind::Email => "EMAIL",
            ChannelKind::Push => "PUSH",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Destination for every line a channel or alert emits.
pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes to the process stdout, the console of the demo server.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps emitted lines in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OutputSink for MemorySink {
    fn emit(&self, line: &str) {
        self.guard().push(line.to_string());
    }
}

pub trait Channel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    /// Emit `message` on this channel. Cannot fail.
    fn deliver(&self, message: &str);
}

macro_rules! sink_channel {
    ($name:ident, $kind:expr) => {
        #[derive(Clone)]
        pub struct $name {
            sink: Arc<dyn OutputSink>,
        }

        impl $name {
            pub fn new(sink: Arc<dyn OutputSink>) -> Self {
                Self { sink }
            }
        }

        impl Channel for $name {
            fn kind(&self) -> ChannelKind {
                $kind
            }

            fn deliver(&self, message: &str) {
                tracing::debug!(channel = %self.kind(), "Delivering notification");
                self.sink
                    .emit(&format!("[{}] Notification sent: {}", self.kind(), message));
            }
        }
    };
}

sink_channel!(SmsChannel, ChannelKind::Sms);
sink_channel!(EmailChannel, ChannelKind::Email);
sink_channel!(PushChannel, ChannelKind::Push);

/// Build the channel of the given kind writing to `sink`.
pub fn channel_for(kind: ChannelKind, sink: Arc<dyn OutputSink>) -> Arc<dyn Channel> {
    match kind {
        ChannelKind::Sms => Arc::new(SmsChannel::new(sink)),
        ChannelKind::Email => Arc::new(EmailChannel::new(sink)),
        ChannelKind::Push => Arc::new(PushChannel::new(sink)),
    }
}
