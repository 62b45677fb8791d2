//! Input validation
//!
//! Strips every recognised grid and coordinate block from the raw input.
//! Whatever is left over is residue: text the parser would otherwise ignore.

use crate::syntax::{COORDINATE_PATTERN, GRID_BLOCK_PATTERN};

/// Remove the leading grid block and every coordinate block, returning the
/// residue verbatim.
pub fn find_residue(raw: &str) -> String {
    let without_grid = GRID_BLOCK_PATTERN.replace(raw, "");
    COORDINATE_PATTERN
        .replace_all(&without_grid, "")
        .into_owned()
}

/// Residue counts as incorrect input once space characters are removed.
/// Other whitespace (tabs, newlines) is not forgiven.
pub fn has_incorrect_items(residue: &str) -> bool {
    residue.chars().any(|c| c != ' ')
}
