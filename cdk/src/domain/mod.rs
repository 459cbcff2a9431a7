//! Domain layer: pure types and validation for apps, stacks and environments.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `crate::output`, `std::fs`, or `std::env`.
//! All functions are synchronous and take data in, returning data out.

pub mod app;
pub mod assembly;
pub mod config;
pub mod environment;
pub mod error;
pub mod stack;

pub use app::App;
pub use assembly::{CloudAssembly, Manifest, synthesize};
pub use config::Settings;
pub use environment::DeployEnv;
pub use error::StackError;
pub use stack::{Stack, StackProps, validate_stack_name};
