// src/config/mod.rs
mod models;

pub use models::*;

use crate::error::CheckError;
use crate::health::Status;
use crate::plugin::event::Event;
use tracing::debug;

/// Gate run before any endpoint is contacted.
pub fn validate(config: &CheckConfig) -> Result<Status, CheckError> {
    if config.example.is_empty() {
        return Err(CheckError::MissingExample);
    }
    Ok(Status::Ok)
}

impl CheckConfig {
    /// Apply the `<keyspace>/example` annotation carried by an incoming
    /// event. A non-empty check annotation wins, then a non-empty entity
    /// annotation; otherwise the configured value is kept.
    pub fn apply_event_overrides(&mut self, info: &PluginInfo, event: &Event) {
        let key = info.annotation_key("example");
        let sources = [
            ("check", event.check.as_ref().map(|c| &c.metadata.annotations)),
            ("entity", event.entity.as_ref().map(|e| &e.metadata.annotations)),
        ];

        let found = sources.into_iter().find_map(|(origin, annotations)| {
            annotations
                .and_then(|a| a.get(&key))
                .filter(|value| !value.is_empty())
                .map(|value| (origin, value))
        });

        if let Some((origin, value)) = found {
            debug!("Overriding example from {} annotation {}", origin, key);
            self.example = value.clone();
        }
    }
}
