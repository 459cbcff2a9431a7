//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::domain::{App, CloudAssembly, Stack, StackProps};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Key-value pairs from a `.env` file or the process environment.
pub type EnvMap = BTreeMap<String, String>;

// ── Configuration Ports ───────────────────────────────────────────────────────

/// Reads a `.env`-style file.
pub trait EnvFileLoader {
    /// Load all pairs from `path`.
    ///
    /// A missing file is not an error: implementations return an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<EnvMap>;
}

/// Read access to the process environment.
pub trait ProcessEnv {
    /// Snapshot of every variable with a UTF-8 name and value.
    fn vars(&self) -> EnvMap;

    /// Look up a single variable.
    fn var(&self, key: &str) -> Option<String> {
        self.vars().remove(key)
    }
}

// ── Stack Factory Port ────────────────────────────────────────────────────────

/// Builds a stack and registers it in the application context.
///
/// This is the seam to the stack definition: the bootstrap never knows what
/// a stack contains, only that building one under a name with some props
/// either registers it or fails.
pub trait StackFactory {
    /// Build the stack `name` with `props` and register it in `app`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stack cannot be constructed or registered.
    fn build(&self, app: &mut App, name: &str, props: StackProps) -> Result<Stack>;
}

// ── Assembly Port ─────────────────────────────────────────────────────────────

/// Persists a synthesized cloud assembly.
pub trait AssemblyWriter {
    /// Write `assembly` into `outdir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be written.
    fn write(&self, outdir: &Path, assembly: &CloudAssembly) -> Result<()>;
}
