//! Networking utilities for Sperm Analyzer
//!
//! This crate provides the backend connectivity collaborator: an HTTP
//! health probe and a monitor that reports its results to the session
//! status store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod health;
pub mod monitor;

pub use health::{HealthError, HealthProbe, HealthProbeConfig, HttpHealthProbe};
pub use monitor::ConnectivityMonitor;
