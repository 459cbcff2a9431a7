//! Application services: use-case orchestration over port traits.

pub mod bootstrap;
pub mod config_service;
pub mod synth;
