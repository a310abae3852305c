//! Application state for Sperm Analyzer
//!
//! This crate holds the shared, mutable state of the shell: the session
//! status reported by external collaborators and read by the presentation
//! layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;

pub use session::{
    BackendConnection, ModelReadiness, SessionStatus, SessionStatusStore, StatusEvent,
};
