use anyhow::{Context, Result};
use std::path::Path;

/// Load a ticker list: one symbol per line, blank lines ignored.
///
/// Symbols are trimmed, upper-cased, sorted and de-duplicated.
pub fn load_symbols(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read symbols file {}", path.display()))?;
    Ok(parse_symbols(&content))
}

pub fn parse_symbols(content: &str) -> Vec<String> {
    let mut symbols: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect();
    symbols.sort();
    symbols.dedup();
    symbols
}
