//! In-memory, append-only log of submitted notifications.

use chrono::Local;
use serde::Serialize;
use std::sync::RwLock;

use crate::alert::AlertKind;
use crate::priority::Priority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRecord {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub priority: Priority,
    pub icon: String,
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
    pub result: String,
}

impl NotificationRecord {
    /// Record for an alert of `kind` sent just now.
    pub fn now(kind: AlertKind, message: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            priority: kind.priority(),
            icon: kind.icon().to_string(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            result: result.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total: usize,
    pub security: usize,
    pub weather: usize,
    pub health: usize,
    pub academic: usize,
    pub urgent: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl HistoryStats {
    pub fn for_kind(&self, kind: AlertKind) -> usize {
        match kind {
            AlertKind::Security => self.security,
            AlertKind::Weather => self.weather,
            AlertKind::Health => self.health,
            AlertKind::Academic => self.academic,
        }
    }

    pub fn for_priority(&self, priority: Priority) -> usize {
        match priority {
            Priority::Urgent => self.urgent,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    fn add(&mut self, record: &NotificationRecord) {
        self.total += 1;
        match record.kind {
            AlertKind::Security => self.security += 1,
            AlertKind::Weather => self.weather += 1,
            AlertKind::Health => self.health += 1,
            AlertKind::Academic => self.academic += 1,
        }
        match record.priority {
            Priority::Urgent => self.urgent += 1,
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct History {
    records: RwLock<Vec<NotificationRecord>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: NotificationRecord) {
        // A poisoned lock still holds a consistent Vec; keep appending.
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.push(record);
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> Vec<NotificationRecord> {
        let records = self.read();
        let start = records.len().saturating_sub(n);
        records[start..].to_vec()
    }

    pub fn all(&self) -> Vec<NotificationRecord> {
        self.read().clone()
    }

    pub fn stats(&self) -> HistoryStats {
        self.read().iter().fold(HistoryStats::default(), |mut stats, record| {
            stats.add(record);
            stats
        })
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<NotificationRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }
}
