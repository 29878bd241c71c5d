#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use yuimod::cli::args::CliArgs;
use yuimod::cli::driver;
use yuimod::cli::reporter::Reporter;

fn main() -> Result<()> {
    // Initialize tracing if YUIMOD_LOG or RUST_LOG is set (zero cost otherwise).
    yuimod::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let pretty = args.pretty.unwrap_or_else(|| std::io::stderr().is_terminal());
    let reporter = Reporter::new(pretty);

    let result = match driver::compile(&args, &cwd) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("{}", reporter.format_error(&error));
            std::process::exit(1);
        }
    };

    if result.emitted_files.is_empty() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(driver::render_stdout(&result.modules).as_bytes())
            .context("failed to write to stdout")?;
    } else {
        eprintln!("{}", reporter.format_summary(&result.emitted_files));
    }
    Ok(())
}
