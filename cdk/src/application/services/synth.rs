//! Application service: hand the app off as a cloud assembly.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::AssemblyWriter;
use crate::domain::{App, CloudAssembly, synthesize};

/// Synthesize `app` and write the assembly into `outdir`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn synth(app: &App, writer: &impl AssemblyWriter, outdir: &Path) -> Result<CloudAssembly> {
    let assembly = synthesize(app);
    writer
        .write(outdir, &assembly)
        .with_context(|| format!("cannot write cloud assembly to {}", outdir.display()))?;
    tracing::info!(
        outdir = %outdir.display(),
        artifacts = assembly.manifest.artifacts.len(),
        "cloud assembly written"
    );
    Ok(assembly)
}
