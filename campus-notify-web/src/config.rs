use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Entries shown on the home page.
    pub recent_limit: usize,
    /// Entries shown on the dashboard.
    pub dashboard_limit: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            recent_limit: 5,
            dashboard_limit: 10,
        }
    }
}

impl WebConfig {
    /// Defaults, then the TOML file named by `CAMPUS_NOTIFY_CONFIG`, then
    /// individual environment variables.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Same layering as [`WebConfig::load`], reading variables through `lookup`.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = match lookup("CAMPUS_NOTIFY_CONFIG") {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(port) = lookup("CAMPUS_NOTIFY_PORT").or_else(|| lookup("PORT")) {
            config.port = port.parse()?;
        }

        if let Some(host) = lookup("CAMPUS_NOTIFY_HOST") {
            config.host = host;
        }

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load_with(pairs: &[(&str, &str)]) -> anyhow::Result<WebConfig> {
        let vars = vars(pairs);
        WebConfig::load_from(|key| vars.get(key).cloned())
    }

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!(
            "campus-notify-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = WebConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.dashboard_limit, 10);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = WebConfig::from_toml("port = 8080\nrecent_limit = 3\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.dashboard_limit, 10);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(WebConfig::from_toml("port = \"not a number\"").is_err());
    }

    #[test]
    fn test_load_without_variables_uses_defaults() {
        assert_eq!(load_with(&[]).unwrap(), WebConfig::default());
    }

    #[test]
    fn test_load_reads_config_file() {
        let path = write_config("file", "host = \"0.0.0.0\"\nport = 8081\ndashboard_limit = 20\n");
        let config = load_with(&[("CAMPUS_NOTIFY_CONFIG", path.to_str().unwrap())]).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.dashboard_limit, 20);
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn test_env_port_overrides_file_and_generic_port() {
        let path = write_config("port", "port = 8081\n");
        let config = load_with(&[
            ("CAMPUS_NOTIFY_CONFIG", path.to_str().unwrap()),
            ("CAMPUS_NOTIFY_PORT", "9000"),
            ("PORT", "9100"),
        ])
        .unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_generic_port_used_when_specific_missing() {
        let config = load_with(&[("PORT", "9100")]).unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_host_override() {
        let config = load_with(&[("CAMPUS_NOTIFY_HOST", "0.0.0.0")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_non_numeric_port_is_an_error() {
        assert!(load_with(&[("CAMPUS_NOTIFY_PORT", "http")]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let missing = "/nonexistent/campus-notify.toml";
        assert!(load_with(&[("CAMPUS_NOTIFY_CONFIG", missing)]).is_err());
    }
}
