//! Core library components.

pub mod config;
pub mod constants;
pub mod detect;
pub mod envfile;
pub mod naming;
pub mod redact;
pub mod roles;
pub mod scaffold;
pub mod types;
