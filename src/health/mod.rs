// src/health/mod.rs
mod checker;
mod registry;
mod status;

pub use checker::{EndpointOutcome, EndpointScanner, ScanReport};
pub use registry::{Endpoint, EndpointRegistry};
pub use status::Status;
