// src/plugin/mod.rs
pub mod event;

use crate::config::{self, CheckConfig, PluginInfo};
use crate::error::CheckError;
use crate::health::{EndpointRegistry, EndpointScanner, Status};
use event::Event;
use std::io::Read;
use tracing::{debug, info};

/// Read the event piped on stdin. Empty input is a parse error, since the
/// caller only reads when something is connected to the pipe.
pub fn read_event<R: Read>(mut reader: R) -> Result<Event, CheckError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    let event: Event = serde_json::from_str(&buf)?;
    if event.check.is_none() {
        return Err(CheckError::EventMissingCheck);
    }

    Ok(event)
}

/// Host harness: applies event overrides, gates on validation, then scans.
pub struct Plugin {
    info: PluginInfo,
    registry: EndpointRegistry,
    scanner: EndpointScanner,
}

impl Plugin {
    pub fn new(info: PluginInfo, registry: EndpointRegistry) -> Result<Self, CheckError> {
        Ok(Self {
            info,
            registry,
            scanner: EndpointScanner::new()?,
        })
    }

    pub async fn run(&self, mut config: CheckConfig, event: Option<&Event>) -> Status {
        if let Some(event) = event {
            config.apply_event_overrides(&self.info, event);
        }

        if let Err(e) = config::validate(&config) {
            println!("Error validating input: {}", e);
            return e.status();
        }

        debug!(
            "{} checking {} endpoints",
            self.info.name,
            self.registry.len()
        );

        let status = self.scanner.scan(&self.registry).await;
        info!("{} finished with status {}", self.info.name, status);
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_unknown() {
        let err = read_event(" \n".as_bytes()).unwrap_err();
        assert!(matches!(err, CheckError::Event(_)));
        assert_eq!(err.status(), Status::Unknown);
    }

    #[test]
    fn malformed_event_is_unknown() {
        let err = read_event("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, CheckError::Event(_)));
        assert_eq!(err.status(), Status::Unknown);
    }

    #[test]
    fn event_without_check_is_rejected() {
        let err = read_event(r#"{"entity":{"metadata":{"name":"host"}}}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, CheckError::EventMissingCheck));
    }

    #[test]
    fn event_annotations_are_parsed() {
        let raw = r#"{
            "check": {
                "metadata": {
                    "name": "endpoint-check",
                    "annotations": {"sensu.io/plugins/endpoint-check/config/example": "abc"}
                }
            }
        }"#;
        let event = read_event(raw.as_bytes()).unwrap();
        let check = event.check.unwrap();
        assert_eq!(check.metadata.name, "endpoint-check");
        assert_eq!(
            check.metadata.annotations["sensu.io/plugins/endpoint-check/config/example"],
            "abc"
        );
    }
}
