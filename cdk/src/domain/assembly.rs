//! Cloud assembly model: the handoff the CDK toolkit reads after the app exits.
//!
//! Pure data: building a [`CloudAssembly`] performs no I/O. Maps are ordered
//! so the same app always serializes to the same bytes.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::app::App;

/// Cloud assembly schema version written to `manifest.json`.
pub const CLOUD_ASSEMBLY_VERSION: &str = "36.0.0";
/// Artifact type for a CloudFormation stack.
pub const STACK_ARTIFACT_TYPE: &str = "aws:cloudformation:stack";
/// Name of the manifest file inside the assembly directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json` contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub version: String,
    pub artifacts: BTreeMap<String, Artifact>,
}

/// One stack entry in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(rename = "type")]
    pub kind: String,
    pub environment: String,
    pub properties: StackArtifactProperties,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackArtifactProperties {
    pub template_file: String,
}

/// Manifest plus template bodies keyed by file name.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudAssembly {
    pub manifest: Manifest,
    pub templates: BTreeMap<String, Value>,
}

/// Build the cloud assembly for every stack registered in `app`.
#[must_use]
pub fn synthesize(app: &App) -> CloudAssembly {
    let mut artifacts = BTreeMap::new();
    let mut templates = BTreeMap::new();

    for stack in app.stacks() {
        let template_file = stack.template_file();
        artifacts.insert(
            stack.name().to_string(),
            Artifact {
                kind: STACK_ARTIFACT_TYPE.to_string(),
                environment: stack.env().target(),
                properties: StackArtifactProperties {
                    template_file: template_file.clone(),
                },
                display_name: stack.name().to_string(),
            },
        );
        templates.insert(template_file, stack.template());
    }

    CloudAssembly {
        manifest: Manifest {
            version: CLOUD_ASSEMBLY_VERSION.to_string(),
            artifacts,
        },
        templates,
    }
}
