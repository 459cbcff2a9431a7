//! Filesystem infrastructure: implements `AssemblyWriter`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::AssemblyWriter;
use crate::domain::CloudAssembly;
use crate::domain::assembly::MANIFEST_FILE;

/// Writes `manifest.json` and one template per stack under the output
/// directory. Existing files with the same names are overwritten.
pub struct FsAssemblyWriter;

impl AssemblyWriter for FsAssemblyWriter {
    fn write(&self, outdir: &Path, assembly: &CloudAssembly) -> Result<()> {
        std::fs::create_dir_all(outdir)
            .with_context(|| format!("creating directory {}", outdir.display()))?;

        write_json(&outdir.join(MANIFEST_FILE), &assembly.manifest)?;
        for (file, body) in &assembly.templates {
            write_json(&outdir.join(file), body)?;
        }
        Ok(())
    }
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {}", path.display()))?;
    content.push('\n');
    std::fs::write(path, content).with_context(|| format!("writing file {}", path.display()))
}
