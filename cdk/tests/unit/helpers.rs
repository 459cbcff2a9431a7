//! Shared test doubles for the application ports.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::Result;
use customer_agent_cdk::application::ports::{
    AssemblyWriter, EnvFileLoader, EnvMap, ProcessEnv, StackFactory,
};
use customer_agent_cdk::domain::{App, CloudAssembly, Stack, StackProps};

pub fn env_map(pairs: &[(&str, &str)]) -> EnvMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ── Env file doubles ─────────────────────────────────────────────────────────

/// Serves a fixed map and records every path it was asked to load.
#[derive(Default)]
pub struct FakeEnvFile {
    pub vars: EnvMap,
    pub loaded: RefCell<Vec<PathBuf>>,
}

impl FakeEnvFile {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: env_map(pairs),
            loaded: RefCell::default(),
        }
    }
}

impl EnvFileLoader for FakeEnvFile {
    fn load(&self, path: &Path) -> Result<EnvMap> {
        self.loaded.borrow_mut().push(path.to_path_buf());
        Ok(self.vars.clone())
    }
}

/// An env file that exists but cannot be parsed.
pub struct MalformedEnvFile;

impl EnvFileLoader for MalformedEnvFile {
    fn load(&self, path: &Path) -> Result<EnvMap> {
        anyhow::bail!("cannot parse {}: line 1", path.display())
    }
}

// ── Process env double ───────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeProcessEnv(pub EnvMap);

impl FakeProcessEnv {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self(env_map(pairs))
    }
}

impl ProcessEnv for FakeProcessEnv {
    fn vars(&self) -> EnvMap {
        self.0.clone()
    }
}

// ── Stack factory doubles ────────────────────────────────────────────────────

/// Records each `build` call and registers the stack like the real factory.
#[derive(Default)]
pub struct RecordingStackFactory {
    pub calls: RefCell<Vec<(String, StackProps)>>,
}

impl StackFactory for RecordingStackFactory {
    fn build(&self, app: &mut App, name: &str, props: StackProps) -> Result<Stack> {
        self.calls
            .borrow_mut()
            .push((name.to_string(), props.clone()));
        let stack = Stack::new(name, props)?;
        app.add_stack(stack.clone())?;
        Ok(stack)
    }
}

/// Always fails, as a stack definition with a construction error would.
pub struct FailingStackFactory;

impl StackFactory for FailingStackFactory {
    fn build(&self, _: &mut App, _: &str, _: StackProps) -> Result<Stack> {
        anyhow::bail!("stack definition exploded")
    }
}

/// Returns a stack but forgets to register it.
pub struct ForgetfulStackFactory;

impl StackFactory for ForgetfulStackFactory {
    fn build(&self, _: &mut App, name: &str, props: StackProps) -> Result<Stack> {
        Ok(Stack::new(name, props)?)
    }
}

// ── Assembly writer double ───────────────────────────────────────────────────

/// Keeps every written assembly in memory.
#[derive(Default)]
pub struct MemoryAssemblyWriter {
    pub written: RefCell<Vec<(PathBuf, CloudAssembly)>>,
}

impl AssemblyWriter for MemoryAssemblyWriter {
    fn write(&self, outdir: &Path, assembly: &CloudAssembly) -> Result<()> {
        self.written
            .borrow_mut()
            .push((outdir.to_path_buf(), assembly.clone()));
        Ok(())
    }
}
