use colored::Colorize;
use std::path::PathBuf;

/// Formats run failures and summaries for the terminal.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// `error: <outermost context>` followed by one `  caused by: ...` line
    /// per underlying cause.
    pub fn format_error(&self, error: &anyhow::Error) -> String {
        let mut out = format!("{} {}", self.label("error:"), error);
        for cause in error.chain().skip(1) {
            out.push_str("\n  ");
            out.push_str(&self.dim("caused by:"));
            out.push(' ');
            out.push_str(&cause.to_string());
        }
        out
    }

    pub fn format_summary(&self, files: &[PathBuf]) -> String {
        let mut out = String::new();
        for file in files {
            out.push_str(&self.dim("wrote"));
            out.push(' ');
            out.push_str(&file.display().to_string());
            out.push('\n');
        }
        let count = match files.len() {
            1 => "1 module".to_string(),
            n => format!("{n} modules"),
        };
        out.push_str(&self.success(&count));
        out
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}
