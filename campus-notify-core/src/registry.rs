//! Explicit table of known notification types, built once at startup.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::alert::{Alert, AlertKind};
use crate::channel::OutputSink;
use crate::error::AlertError;
use crate::fields::UserNotification;

pub type AlertConstructor = fn(String, Arc<dyn OutputSink>) -> Alert;

/// Names with this prefix are abstract bases and never registered.
const BASE_PREFIX: &str = "Base";

#[derive(Clone, Serialize)]
pub struct RegistryEntry {
    pub name: String,
    pub registered_at: DateTime<Local>,
    pub alert_kind: Option<AlertKind>,
    #[serde(skip)]
    constructor: Option<AlertConstructor>,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .field("registered_at", &self.registered_at)
            .field("alert_kind", &self.alert_kind)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry populated with every builtin notification type.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("BaseNotification", None);
        registry.register("BaseAlert", None);
        registry.register_alert(AlertKind::Security, |message, sink| {
            Alert::new(AlertKind::Security, message, sink)
        });
        registry.register_alert(AlertKind::Weather, |message, sink| {
            Alert::new(AlertKind::Weather, message, sink)
        });
        registry.register_alert(AlertKind::Health, |message, sink| {
            Alert::new(AlertKind::Health, message, sink)
        });
        registry.register_alert(AlertKind::Academic, |message, sink| {
            Alert::new(AlertKind::Academic, message, sink)
        });
        registry.register(UserNotification::TYPE_NAME, None);
        registry
    }

    /// Record `name`. Returns false when the name denotes a base type.
    ///
    /// Registering a name twice replaces the earlier entry.
    pub fn register(
        &mut self,
        name: &str,
        constructor: Option<(AlertKind, AlertConstructor)>,
    ) -> bool {
        if name.starts_with(BASE_PREFIX) {
            debug!(name, "Skipping base type");
            return false;
        }

        let entry = RegistryEntry {
            name: name.to_string(),
            registered_at: Local::now(),
            alert_kind: constructor.map(|(kind, _)| kind),
            constructor: constructor.map(|(_, ctor)| ctor),
        };
        info!(name, registered_at = %entry.registered_at, "Type registered");

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        true
    }

    pub fn register_alert(&mut self, kind: AlertKind, constructor: AlertConstructor) -> bool {
        self.register(kind.type_name(), Some((kind, constructor)))
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Build the alert registered for `tag`.
    pub fn construct(
        &self,
        tag: &str,
        message: impl Into<String>,
        sink: Arc<dyn OutputSink>,
    ) -> Result<Alert, AlertError> {
        let kind = AlertKind::from_tag(tag)?;
        let constructor = self
            .entries
            .iter()
            .find(|e| e.alert_kind == Some(kind))
            .and_then(|e| e.constructor)
            .ok_or_else(|| AlertError::UnsupportedKind(tag.to_string()))?;
        Ok(constructor(message.into(), sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemorySink;

    #[test]
    fn test_builtin_skips_base_types() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 5);
        assert!(registry.get("BaseNotification").is_none());
        assert!(registry.get("BaseAlert").is_none());
        assert_eq!(
            registry.names(),
            vec![
                "SecurityAlert",
                "WeatherAlert",
                "HealthAlert",
                "AcademicAlert",
                "UserNotification",
            ]
        );
    }

    #[test]
    fn test_register_reports_skip() {
        let mut registry = Registry::new();
        assert!(!registry.register("BaseThing", None));
        assert!(registry.register("Thing", None));
        assert!(registry.register("Thing", None));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_construct_builds_registered_kind() {
        let registry = Registry::builtin();
        let sink = Arc::new(MemorySink::new());
        let alert = registry.construct("HEALTH", "Flu", sink).unwrap();
        assert_eq!(alert.kind(), AlertKind::Health);
        assert_eq!(alert.message(), "Flu");
    }

    #[test]
    fn test_construct_rejects_unknown_and_unregistered() {
        let sink: Arc<dyn OutputSink> = Arc::new(MemorySink::new());
        let registry = Registry::builtin();
        assert!(matches!(
            registry.construct("FIRE", "x", sink.clone()),
            Err(AlertError::UnsupportedKind(_))
        ));

        let empty = Registry::new();
        assert!(matches!(
            empty.construct("SECURITY", "x", sink),
            Err(AlertError::UnsupportedKind(_))
        ));
    }
}
