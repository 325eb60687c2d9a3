//! Emergency capabilities and a notifier that composes all of them.

pub trait SecurityEmergency {
    fn notify_security(&self, message: &str) -> String {
        format!("[SECURITY] Critical alert: {}", message)
    }
}

pub trait WeatherEmergency {
    fn notify_weather(&self, message: &str) -> String {
        format!("[WEATHER] Weather alert: {}", message)
    }
}

pub trait HealthEmergency {
    fn notify_health(&self, message: &str) -> String {
        format!("[HEALTH] Health emergency: {}", message)
    }
}

pub trait AcademicEmergency {
    fn notify_academic(&self, message: &str) -> String {
        format!("[ACADEMIC] Urgent information: {}", message)
    }
}

/// Notifier holding every emergency capability.
#[derive(Debug, Clone)]
pub struct EmergencyNotifier {
    name: String,
}

impl EmergencyNotifier {
    /// Capabilities in the order calls are resolved against them, most
    /// specific first.
    const RESOLUTION_ORDER: [&'static str; 5] = [
        "EmergencyNotifier",
        "SecurityEmergency",
        "WeatherEmergency",
        "HealthEmergency",
        "AcademicEmergency",
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolution_order(&self) -> Vec<&'static str> {
        Self::RESOLUTION_ORDER.to_vec()
    }

    pub fn notify_all(&self, message: &str) -> Vec<String> {
        vec![
            self.notify_security(message),
            self.notify_weather(message),
            self.notify_health(message),
            self.notify_academic(message),
        ]
    }
}

impl Default for EmergencyNotifier {
    fn default() -> Self {
        Self::new("Notifier")
    }
}

impl SecurityEmergency for EmergencyNotifier {}
impl WeatherEmergency for EmergencyNotifier {}
impl HealthEmergency for EmergencyNotifier {}
impl AcademicEmergency for EmergencyNotifier {}
