use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// `log` level name: error, warn, info, debug or trace
    pub log_level: String,
    /// Ask the backend to warm its cache before the first page is loaded
    pub init_cache_on_start: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            init_cache_on_start: true,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
{
    "log_level": "debug",
    "init_cache_on_start": true
}
"#;

impl ClientConfig {
    /// Parse an override document; missing keys keep their defaults
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn embedded() -> Self {
        Self::from_json(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load from an optional override, falling back to the embedded default
    pub fn load(override_json: Option<&str>) -> Self {
        match override_json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("ignoring invalid client config: {}", e);
                Self::embedded()
            }
            None => Self::embedded(),
        }
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
