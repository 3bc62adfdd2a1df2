// src/health/checker.rs
use crate::error::CheckError;
use crate::health::{Endpoint, EndpointRegistry, Status};
use reqwest::{Client, StatusCode};
use std::fmt;
use tracing::{debug, error, info};

/// Result of evaluating a single endpoint. `Display` renders the log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointOutcome {
    Healthy { service: String },
    TransportError { service: String, error: String },
    UnexpectedStatus { service: String, status: u16 },
}

impl EndpointOutcome {
    pub fn service(&self) -> &str {
        match self {
            EndpointOutcome::Healthy { service }
            | EndpointOutcome::TransportError { service, .. }
            | EndpointOutcome::UnexpectedStatus { service, .. } => service,
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, EndpointOutcome::Healthy { .. })
    }
}

impl fmt::Display for EndpointOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointOutcome::Healthy { service } => write!(f, "{}: status OK", service),
            EndpointOutcome::TransportError { service, error } => {
                write!(f, "{}: check ERROR: {}", service, error)
            }
            EndpointOutcome::UnexpectedStatus { service, status } => {
                write!(f, "{}: status check ERROR: {} != 200", service, status)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub status: Status,
    /// Endpoints actually evaluated, in order. Anything after the first
    /// failure is absent.
    pub outcomes: Vec<EndpointOutcome>,
}

pub struct EndpointScanner {
    client: Client,
}

impl EndpointScanner {
    /// Builds a scanner whose client carries no explicit request timeout.
    pub fn new() -> Result<Self, CheckError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CheckError::Client)?;

        Ok(Self { client })
    }

    pub async fn scan(&self, registry: &EndpointRegistry) -> Status {
        self.scan_report(registry).await.status
    }

    pub async fn scan_report(&self, registry: &EndpointRegistry) -> ScanReport {
        let mut outcomes = Vec::with_capacity(registry.len());

        for endpoint in registry.iter() {
            let outcome = self.check_endpoint(endpoint).await;
            let healthy = outcome.is_healthy();

            if healthy {
                info!("{}", outcome);
            } else {
                error!("{}", outcome);
            }
            outcomes.push(outcome);

            if !healthy {
                return ScanReport {
                    status: Status::Critical,
                    outcomes,
                };
            }
        }

        ScanReport {
            status: Status::Ok,
            outcomes,
        }
    }

    async fn check_endpoint(&self, endpoint: &Endpoint) -> EndpointOutcome {
        let service = endpoint.service.clone();
        debug!("Checking {} at {}", service, endpoint.url);

        let response = match self.client.get(endpoint.url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                return EndpointOutcome::TransportError {
                    service,
                    error: e.to_string(),
                }
            }
        };

        let status = response.status();
        // Release the connection before deciding, on every path.
        drop(response);

        if status != StatusCode::OK {
            return EndpointOutcome::UnexpectedStatus {
                service,
                status: status.as_u16(),
            };
        }

        EndpointOutcome::Healthy { service }
    }
}
