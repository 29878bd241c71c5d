use anyhow::{Context, Result, bail};
use std::path::{Component, Path, PathBuf};
use tracing::info;
use yuimod_ast::Printer;
use yuimod_emitter::{ModuleGraph, YuiFormatter, transpile};

use crate::cli::args::CliArgs;
use crate::cli::config::{ResolvedConfig, resolve_config};
use crate::cli::manifest::load_manifest;

/// One wrapped module, printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedModule {
    pub name: String,
    pub relative_path: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct CompilationResult {
    pub modules: Vec<EmittedModule>,
    /// Files written; empty when printing to stdout.
    pub emitted_files: Vec<PathBuf>,
}

/// Load the manifest named by `args`, rewrite every module, and write the
/// output files when an output directory is configured.
pub fn compile(args: &CliArgs, cwd: &Path) -> Result<CompilationResult> {
    let manifest_path = cwd.join(&args.manifest);
    let config = resolve_config(args, &manifest_path, cwd)?;
    let modules = transpile_manifest(&manifest_path, &config)?;

    let emitted_files = match &config.out_dir {
        Some(out_dir) => write_outputs(&modules, out_dir)?,
        None => Vec::new(),
    };
    Ok(CompilationResult {
        modules,
        emitted_files,
    })
}

/// Rewrite the modules of one manifest. Nothing is returned unless every
/// module succeeds.
pub fn transpile_manifest(manifest_path: &Path, config: &ResolvedConfig) -> Result<Vec<EmittedModule>> {
    let manifest = load_manifest(manifest_path)?;

    let mut graph = ModuleGraph::new();
    let mut order = Vec::with_capacity(manifest.modules.len());
    for module in manifest.modules {
        let relative_path = module.relative_path();
        order.push(graph.add_module(module.name, relative_path, module.ast)?);
    }

    let formatter = YuiFormatter::with_options(config.formatter.clone());
    transpile(&mut graph, &order, &formatter)
        .with_context(|| format!("failed to rewrite {}", manifest_path.display()))?;
    info!(modules = order.len(), "rewrote manifest");

    Ok(order
        .iter()
        .map(|&id| {
            let module = graph.module(id);
            EmittedModule {
                name: module.name.clone(),
                relative_path: module
                    .ast
                    .filename
                    .clone()
                    .unwrap_or_else(|| module.relative_path.clone()),
                text: Printer::print_program(&module.ast),
            }
        })
        .collect())
}

/// Write every module to `<out_dir>/<relative_path>`.
///
/// Every path is checked before the first write, so a path that would land
/// outside `out_dir` leaves the directory untouched. An I/O failure part way
/// through can still leave the files before it written.
pub fn write_outputs(modules: &[EmittedModule], out_dir: &Path) -> Result<Vec<PathBuf>> {
    for module in modules {
        check_output_path(&module.relative_path)?;
    }

    let mut written = Vec::with_capacity(modules.len());
    for module in modules {
        let path = out_dir.join(&module.relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, &module.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Output paths must stay below the output directory: no roots, drive
/// prefixes, or `..` segments.
fn check_output_path(relative_path: &str) -> Result<()> {
    let escapes = Path::new(relative_path).components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes || relative_path.is_empty() {
        bail!("output path `{relative_path}` is not inside the output directory");
    }
    Ok(())
}

/// Every module preceded by a `// <relativePath>` header line.
pub fn render_stdout(modules: &[EmittedModule]) -> String {
    let mut out = String::new();
    for module in modules {
        out.push_str("// ");
        out.push_str(&module.relative_path);
        out.push('\n');
        out.push_str(&module.text);
    }
    out
}
