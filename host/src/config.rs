//! Host settings read from the environment (and `.env`, when present).
//!
//! - `CLARA_HOST`: bind address, default `127.0.0.1`
//! - `CLARA_PORT`: bind port, default `8080`
//! - `CLARA_OPEN_BROWSER`: open the client in the default browser, default `true`

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("CLARA_HOST")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("CLARA_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("CLARA_PORT={:?} is not a port number, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let open_browser = match lookup("CLARA_OPEN_BROWSER") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    warn!("CLARA_OPEN_BROWSER={:?} is not a boolean, using true", raw);
                    true
                }
            },
            None => true,
        };

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("CLARA_HOST", "0.0.0.0"),
            ("CLARA_PORT", "3000"),
            ("CLARA_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:3000");
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[("CLARA_PORT", "eighty"), ("CLARA_OPEN_BROWSER", "maybe")]);
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
    }
}
