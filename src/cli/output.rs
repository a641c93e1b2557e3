use std::io::Write;
use std::path::Path;

use colored::*;

use crate::cleaner::Reporter;
use crate::common::CleanError;

/// Prints one line per deletion attempt and one per failure on stdout.
///
/// Write errors (e.g. a closed pipe) are ignored so the run still finishes.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn deleting(&mut self, path: &Path) {
        let _ = writeln!(
            std::io::stdout().lock(),
            "{} {}",
            "Deleting:".yellow(),
            path.display()
        );
    }

    fn failed(&mut self, error: &CleanError) {
        let _ = writeln!(std::io::stdout().lock(), "  {}", error.to_string().red());
    }
}
