// src/health/registry.rs
use crate::error::CheckError;
use std::collections::HashSet;
use url::Url;

/// Endpoints polled by every run, in evaluation order.
const BUILTIN_ENDPOINTS: &[(&str, &str)] = &[
    ("MainPage", "http://geocitizen.link:8080/citizen"),
    ("LoginPage", "http://geocitizen.link:8080/citizen/#/auth"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub service: String,
    pub url: Url,
}

/// Ordered mapping of service name to URL. Iteration follows insertion
/// order, so the first failing service reported is deterministic.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoints: Vec<Endpoint>,
}

impl EndpointRegistry {
    pub fn builtin() -> Result<Self, CheckError> {
        Self::from_pairs(BUILTIN_ENDPOINTS)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, CheckError> {
        let mut seen = HashSet::new();
        let mut endpoints = Vec::with_capacity(pairs.len());

        for (service, raw) in pairs {
            if !seen.insert(*service) {
                return Err(CheckError::DuplicateService(service.to_string()));
            }

            let url = Url::parse(raw).map_err(|source| CheckError::InvalidUrl {
                service: service.to_string(),
                source,
            })?;

            endpoints.push(Endpoint {
                service: service.to_string(),
                url,
            });
        }

        Ok(Self { endpoints })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
