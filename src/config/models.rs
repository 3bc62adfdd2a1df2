// src/config/models.rs
/// Static identity the plugin registers with the monitoring agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub short: &'static str,
    /// Annotation prefix for per-event configuration overrides.
    pub keyspace: &'static str,
}

impl PluginInfo {
    pub const fn endpoint_check() -> Self {
        Self {
            name: "endpoint-check",
            short: "HTTP endpoint health check",
            keyspace: "sensu.io/plugins/endpoint-check/config",
        }
    }

    pub fn annotation_key(&self, path: &str) -> String {
        format!("{}/{}", self.keyspace, path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Required example string; must be non-empty before a scan runs.
    pub example: String,
}

impl CheckConfig {
    pub fn new(example: impl Into<String>) -> Self {
        Self {
            example: example.into(),
        }
    }
}
