//! Word-list file resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Expand each pattern into word-list files, sorted and without duplicates.
///
/// Every pattern must name at least one regular file; the error points at
/// the first one that does not.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let mut matched = 0;
        for entry in glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))? {
            let path = entry.with_context(|| format!("Cannot read a match of '{pattern}'"))?;
            if path.is_file() {
                files.push(path);
                matched += 1;
            }
        }

        if matched == 0 {
            anyhow::bail!("No files found matching '{pattern}'");
        }
        log::debug!("Pattern '{pattern}' matched {matched} word files");
    }

    files.sort();
    files.dedup();
    Ok(files)
}
