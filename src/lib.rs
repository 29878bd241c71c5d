//! Command-line front end for the `YUI.add()` module rewriter.
//!
//! The rewriting itself lives in `yuimod-emitter`; this crate reads module
//! manifests and configuration, drives the emitter, and writes output.

pub mod cli;
pub mod tracing_config;

pub use yuimod_emitter::{YuiFormatter, YuiOptions, transpile};
