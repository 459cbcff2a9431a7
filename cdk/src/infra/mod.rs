//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: `.env` parsing, process
//! environment access, the stack definition, and assembly writing.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod assembly;
pub mod env_file;
pub mod process_env;
pub mod stack_factory;

pub use assembly::FsAssemblyWriter;
pub use env_file::{DotenvFileLoader, EnvFileError, default_env_file};
pub use process_env::OsProcessEnv;
pub use stack_factory::CustomerAgentStackFactory;
