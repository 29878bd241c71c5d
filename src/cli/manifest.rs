//! Module manifest: parser output for every module of a run.
//!
//! ```json
//! { "modules": [
//!     { "name": "app/util", "relativePath": "app/util.js", "ast": { "type": "Program", ... } },
//!     { "name": "app/main", "relativePath": "app/main.js", "ast": { ... } }
//! ] }
//! ```
//!
//! Modules are listed in execution order: dependencies before dependents.

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use yuimod_ast::Program;

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestModule {
    pub name: String,
    /// Output path; defaults to `<name>.js`.
    #[serde(default)]
    pub relative_path: Option<String>,
    pub ast: Program,
}

impl ManifestModule {
    pub fn relative_path(&self) -> String {
        self.relative_path
            .clone()
            .unwrap_or_else(|| format!("{}.js", self.name))
    }
}

pub fn parse_manifest(source: &str) -> Result<Manifest> {
    let manifest: Manifest =
        serde_json::from_str(source).context("failed to parse module manifest JSON")?;

    let mut seen = FxHashSet::default();
    for module in &manifest.modules {
        if !seen.insert(module.name.as_str()) {
            bail!("module `{}` is listed more than once", module.name);
        }
    }
    Ok(manifest)
}

pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest: {}", path.display()))?;
    parse_manifest(&source).with_context(|| format!("failed to load manifest: {}", path.display()))
}
