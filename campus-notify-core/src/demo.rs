//! Self-checks of each building block, shown on the demo page and by the CLI.

use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;

use crate::channel::{Channel, EmailChannel, OutputSink, SmsChannel};
use crate::emergency::EmergencyNotifier;
use crate::fields::UserNotification;
use crate::registry::Registry;
use crate::wrappers::logged;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoResult {
    pub section: &'static str,
    pub outcome: String,
}

impl DemoResult {
    fn new(section: &'static str, outcome: impl Into<String>) -> Self {
        Self {
            section,
            outcome: outcome.into(),
        }
    }
}

pub fn run_demonstrations(registry: &Registry, sink: Arc<dyn OutputSink>) -> Vec<DemoResult> {
    vec![
        channels(Arc::clone(&sink)),
        resolution_order(),
        wrappers(),
        validated_fields(),
        DemoResult::new("registry", format!("{} types registered", registry.len())),
        alerts(registry, sink),
    ]
}

fn channels(sink: Arc<dyn OutputSink>) -> DemoResult {
    let composed: [Arc<dyn Channel>; 2] = [
        Arc::new(SmsChannel::new(Arc::clone(&sink))),
        Arc::new(EmailChannel::new(sink)),
    ];
    for channel in &composed {
        channel.deliver("Channel check");
    }
    DemoResult::new("mixins", "SMS and Email channels working")
}

fn resolution_order() -> DemoResult {
    let order = EmergencyNotifier::new("Test").resolution_order();
    DemoResult::new(
        "resolution_order",
        format!("Resolution order with {} entries", order.len()),
    )
}

fn wrappers() -> DemoResult {
    let outcome = logged("demo_wrapper", &(), || Ok::<_, Infallible>("Wrapper working"))
        .unwrap_or_else(|never| match never {});
    DemoResult::new("wrappers", outcome)
}

fn validated_fields() -> DemoResult {
    match UserNotification::new("Test", "HIGH", "test@campus.edu") {
        Ok(notification) => DemoResult::new("validated_fields", notification.to_string()),
        Err(e) => DemoResult::new("validated_fields", e.to_string()),
    }
}

fn alerts(registry: &Registry, sink: Arc<dyn OutputSink>) -> DemoResult {
    let built = registry
        .construct("SECURITY", "Security test", Arc::clone(&sink))
        .and_then(|security| {
            registry
                .construct("WEATHER", "Weather test", sink)
                .map(|weather| (security, weather))
        });

    match built {
        Ok((security, weather)) => DemoResult::new(
            "alerts",
            format!("Alerts: {}, {}", security.priority(), weather.priority()),
        ),
        Err(e) => DemoResult::new("alerts", e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemorySink;

    #[test]
    fn test_demonstrations_cover_every_section() {
        let registry = Registry::builtin();
        let sink = Arc::new(MemorySink::new());
        let results = run_demonstrations(&registry, sink.clone());

        let sections: Vec<&str> = results.iter().map(|r| r.section).collect();
        assert_eq!(
            sections,
            vec![
                "mixins",
                "resolution_order",
                "wrappers",
                "validated_fields",
                "registry",
                "alerts",
            ]
        );
        assert_eq!(results[1].outcome, "Resolution order with 5 entries");
        assert_eq!(results[2].outcome, "Wrapper working");
        assert_eq!(results[3].outcome, "HIGH: Test (email: test@campus.edu)");
        assert_eq!(results[4].outcome, "5 types registered");
        assert_eq!(results[5].outcome, "Alerts: URGENT, MEDIUM");

        // building alerts does not send them
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_alerts_section_reports_missing_registration() {
        let sink: Arc<dyn OutputSink> = Arc::new(MemorySink::new());
        let results = run_demonstrations(&Registry::new(), sink);
        assert_eq!(results[4].outcome, "0 types registered");
        assert!(results[5].outcome.starts_with("Unsupported alert type"));
    }
}
