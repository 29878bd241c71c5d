//! `yuimod.json` loading.
//!
//! ```json
//! {
//!     // relative to this file
//!     "outDir": "build",
//!     "formatter": { "version": "3.18.1" }
//! }
//! ```
//!
//! Line and block comments are allowed. Command-line flags override the file.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use yuimod_emitter::YuiOptions;

use crate::cli::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "yuimod.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YuimodConfig {
    #[serde(default)]
    pub out_dir: Option<String>,
    #[serde(default)]
    pub formatter: YuiOptions,
}

/// Configuration after applying command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Output directory; `None` prints to stdout.
    pub out_dir: Option<PathBuf>,
    pub formatter: YuiOptions,
}

pub fn parse_config(source: &str) -> Result<YuimodConfig> {
    let stripped = strip_jsonc(source);
    let config = serde_json::from_str(&stripped).context("failed to parse yuimod.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<YuimodConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Locate and load the config for `manifest`, then apply `args` overrides.
///
/// An explicit `--config` must exist; the implicit `yuimod.json` next to the
/// manifest is optional. `outDir` from the file is relative to the file, the
/// `--out-dir` flag to `cwd`.
pub fn resolve_config(args: &CliArgs, manifest: &Path, cwd: &Path) -> Result<ResolvedConfig> {
    let config_path = match &args.config {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            Some(path)
        }
        None => {
            let candidate = manifest
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    };

    let (config, base_dir) = match &config_path {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading config");
            (
                load_config(path)?,
                path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf),
            )
        }
        None => (YuimodConfig::default(), cwd.to_path_buf()),
    };

    let mut resolved = ResolvedConfig {
        out_dir: config.out_dir.map(|dir| base_dir.join(dir)),
        formatter: config.formatter,
    };
    if let Some(out_dir) = &args.out_dir {
        resolved.out_dir = Some(cwd.join(out_dir));
    }
    if let Some(version) = &args.version_marker {
        resolved.formatter.version.clone_from(version);
    }
    Ok(resolved)
}

/// Drop `//` and `/* */` comments outside of string literals.
fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(ch) = chars.next() {
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
                out.push(ch);
            }
            continue;
        }

        if in_block_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block_comment = false;
            } else if ch == '\n' {
                out.push(ch);
            }
            continue;
        }

        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        let next = chars.peek().copied();
        match (ch, next) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                chars.next();
                in_line_comment = true;
            }
            ('/', Some('*')) => {
                chars.next();
                in_block_comment = true;
            }
            _ => out.push(ch),
        }
    }

    out
}
