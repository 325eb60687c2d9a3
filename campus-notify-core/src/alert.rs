use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::channel::{channel_for, Channel, ChannelKind, OutputSink};
use crate::error::AlertError;
use crate::priority::Priority;
use crate::wrappers::{logged, PriorityTag};

/// The four alert kinds. Each fixes its priority, icon and channel set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertKind {
    Security,
    Weather,
    Health,
    Academic,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Security,
        AlertKind::Weather,
        AlertKind::Health,
        AlertKind::Academic,
    ];

    pub fn from_tag(tag: &str) -> Result<Self, AlertError> {
        match tag {
            "SECURITY" => Ok(AlertKind::Security),
            "WEATHER" => Ok(AlertKind::Weather),
            "HEALTH" => Ok(AlertKind::Health),
            "ACADEMIC" => Ok(AlertKind::Academic),
            other => Err(AlertError::UnsupportedKind(other.to_string())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            AlertKind::Security => "SECURITY",
            AlertKind::Weather => "WEATHER",
            AlertKind::Health => "HEALTH",
            AlertKind::Academic => "ACADEMIC",
        }
    }

    /// Name under which the kind is registered.
    pub fn type_name(&self) -> &'static str {
        match self {
            AlertKind::Security => "SecurityAlert",
            AlertKind::Weather => "WeatherAlert",
            AlertKind::Health => "HealthAlert",
            AlertKind::Academic => "AcademicAlert",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            AlertKind::Security => Priority::Urgent,
            AlertKind::Weather => Priority::Medium,
            AlertKind::Health => Priority::High,
            AlertKind::Academic => Priority::Low,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Security => "🚨",
            AlertKind::Weather => "🌧️",
            AlertKind::Health => "🏥",
            AlertKind::Academic => "📚",
        }
    }

    pub fn channels(&self) -> &'static [ChannelKind] {
        match self {
            AlertKind::Security => &[ChannelKind::Sms, ChannelKind::Email, ChannelKind::Push],
            AlertKind::Weather => &[ChannelKind::Email],
            AlertKind::Health => &[ChannelKind::Sms, ChannelKind::Email],
            AlertKind::Academic => &[ChannelKind::Email],
        }
    }

    fn channel_message(&self, channel: ChannelKind, message: &str) -> String {
        match (self, channel) {
            (AlertKind::Security, ChannelKind::Sms) => format!("[URGENT] {}", message),
            (AlertKind::Security, ChannelKind::Email) => format!("Security alert: {}", message),
            (AlertKind::Security, ChannelKind::Push) => format!("🚨 {}", message),
            (AlertKind::Weather, ChannelKind::Email) => format!("Weather alert: {}", message),
            (AlertKind::Health, ChannelKind::Sms) => format!("[HEALTH] {}", message),
            (AlertKind::Health, ChannelKind::Email) => format!("Health alert: {}", message),
            (AlertKind::Academic, ChannelKind::Email) => format!("Academic info: {}", message),
            (kind, _) => format!("[{}] {}", kind.tag(), message),
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            AlertKind::Security => "Security alert sent on 3 channels",
            AlertKind::Weather => "Weather alert sent by email",
            AlertKind::Health => "Health alert sent by SMS and email",
            AlertKind::Academic => "Academic alert sent by email",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AlertKind {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

pub struct Alert {
    kind: AlertKind,
    message: String,
    priority: Priority,
    sent: bool,
    channels: Vec<Arc<dyn Channel>>,
    sink: Arc<dyn OutputSink>,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>, sink: Arc<dyn OutputSink>) -> Self {
        let channels = kind
            .channels()
            .iter()
            .map(|&channel| channel_for(channel, Arc::clone(&sink)))
            .collect();

        Self {
            kind,
            message: message.into(),
            priority: kind.priority(),
            sent: false,
            channels,
            sink,
        }
    }

    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn channel_kinds(&self) -> Vec<ChannelKind> {
        self.channels.iter().map(|c| c.kind()).collect()
    }

    pub fn formatted_message(&self) -> String {
        format!("[{}] {}", self.kind.type_name(), self.message)
    }

    /// Deliver on every enabled channel and return a short summary.
    ///
    /// Runs inside the logging and priority-tagging wrappers.
    pub fn send(&mut self) -> Result<String, AlertError> {
        let tag = PriorityTag::new(self.kind.priority());
        let args = (self.kind.type_name(), self.message.clone());
        logged("send", &args, || tag.call(|| self.dispatch()))
    }

    fn dispatch(&mut self) -> Result<String, AlertError> {
        if self.message.trim().is_empty() {
            return Err(AlertError::EmptyMessage);
        }

        self.sink.emit(&format!(
            "{} Sending {} alert ({}): {}",
            self.kind.icon(),
            self.kind,
            self.priority,
            self.message
        ));

        for channel in &self.channels {
            channel.deliver(&self.kind.channel_message(channel.kind(), &self.message));
        }

        self.sent = true;
        Ok(self.kind.summary().to_string())
    }
}

impl fmt::Debug for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alert")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("priority", &self.priority)
            .field("sent", &self.sent)
            .field("channels", &self.channel_kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemorySink;

    fn build(kind: AlertKind, message: &str) -> (Alert, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Alert::new(kind, message, sink.clone()), sink)
    }

    #[test]
    fn test_from_tag_rejects_unknown() {
        assert_eq!(AlertKind::from_tag("WEATHER"), Ok(AlertKind::Weather));
        assert_eq!(
            AlertKind::from_tag("FIRE"),
            Err(AlertError::UnsupportedKind("FIRE".to_string()))
        );
        assert!(AlertKind::from_tag("security").is_err());
    }

    #[test]
    fn test_security_alert_uses_all_channels() {
        let (mut alert, sink) = build(AlertKind::Security, "Intrusion A");
        assert_eq!(alert.priority(), Priority::Urgent);
        assert!(!alert.is_sent());

        let result = alert.send().unwrap();

        assert!(alert.is_sent());
        assert_eq!(result, "Security alert sent on 3 channels");
        assert_eq!(
            sink.lines(),
            vec![
                "🚨 Sending SECURITY alert (URGENT): Intrusion A",
                "[SMS] Notification sent: [URGENT] Intrusion A",
                "[EMAIL] Notification sent: Security alert: Intrusion A",
                "[PUSH] Notification sent: 🚨 Intrusion A",
            ]
        );
    }

    #[test]
    fn test_every_kind_sends_and_reports_channels() {
        let expected = [
            (AlertKind::Security, "3 channels", 3),
            (AlertKind::Weather, "by email", 1),
            (AlertKind::Health, "by SMS and email", 2),
            (AlertKind::Academic, "by email", 1),
        ];

        for (kind, fragment, channel_count) in expected {
            let (mut alert, sink) = build(kind, "notice");
            let result = alert.send().unwrap();
            assert!(alert.is_sent(), "{} not marked sent", kind);
            assert!(result.contains(fragment), "{}: {}", kind, result);
            assert_eq!(alert.channel_kinds().len(), channel_count);
            // one header line plus one line per channel
            assert_eq!(sink.lines().len(), channel_count + 1);
        }
    }

    #[test]
    fn test_health_alert_channel_messages() {
        let (mut alert, sink) = build(AlertKind::Health, "Flu case");
        alert.send().unwrap();
        let lines = sink.lines();
        assert_eq!(lines[1], "[SMS] Notification sent: [HEALTH] Flu case");
        assert_eq!(lines[2], "[EMAIL] Notification sent: Health alert: Flu case");
    }

    #[test]
    fn test_empty_message_is_not_sent() {
        let (mut alert, sink) = build(AlertKind::Academic, "   ");
        assert_eq!(alert.send(), Err(AlertError::EmptyMessage));
        assert!(!alert.is_sent());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_formatted_message_uses_type_name() {
        let (alert, _) = build(AlertKind::Weather, "Heavy rain");
        assert_eq!(alert.formatted_message(), "[WeatherAlert] Heavy rain");
        assert_eq!(AlertKind::Weather.icon(), "🌧️");
    }
}
