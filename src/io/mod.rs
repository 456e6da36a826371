//! File and stream plumbing for the CLI.

pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Read symbol names from `path`, one per line, skipping blank lines.
pub fn read_symbol_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(split_symbol_lines(&content))
}

/// Split raw text into trimmed, non-empty symbol lines.
pub fn split_symbol_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_symbol_lines_skips_blanks() {
        let content = "foo::bar\n\n   \n  baz::qux  \n";
        assert_eq!(split_symbol_lines(content), vec!["foo::bar", "baz::qux"]);
    }

    #[test]
    fn test_split_symbol_lines_empty_input() {
        assert!(split_symbol_lines("").is_empty());
    }
}
