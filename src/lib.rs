// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod plugin;

pub use error::CheckError;
