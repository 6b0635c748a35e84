//! Output formatting shared by the subcommands.

use std::io::{IsTerminal, Write};

use anyhow::Result;
use osac::{Package, Product};
use serde::Serialize;

/// How results are written to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Print a value as pretty JSON on stdout.
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        write_json(&mut std::io::stdout().lock(), value)
    }

    /// Report a failed command.
    ///
    /// In JSON mode an error object goes to `stdout`; otherwise, or when that
    /// write fails, `Error: <message>` goes to `stderr`.
    pub fn report_error<O: Write, E: Write>(&self, message: &str, stdout: &mut O, stderr: &mut E) {
        let error = serde_json::json!({
            "error": true,
            "message": message,
        });
        if self.json && write_json(stdout, &error).is_ok() {
            return;
        }
        // stderr is the last resort
        let _ = writeln!(stderr, "Error: {message}");
    }

    /// Whether a live progress bar should be drawn.
    pub fn show_progress(&self) -> bool {
        !self.json && !self.quiet && std::io::stderr().is_terminal()
    }

    /// Whether per-file lines should be printed.
    pub fn show_files(&self) -> bool {
        !self.json && !self.quiet
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Product entry for JSON output.
#[derive(Debug, Serialize)]
pub struct ProductEntry {
    pub key: &'static str,
    pub name: &'static str,
}

impl From<Product> for ProductEntry {
    fn from(product: Product) -> Self {
        Self {
            key: product.key(),
            name: product.display_name(),
        }
    }
}

/// One line of a package listing: `name (version)`, starred when updated.
pub fn format_package(package: &Package) -> String {
    let marker = if package.updated { "*" } else { "" };
    format!("{} ({}){marker}", package.name, package.version)
}
