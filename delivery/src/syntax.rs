//! Compiled patterns for the request grammar
//!
//! ```text
//! request     := grid-block coord-block*
//! grid-block  := <digits> "x" <digits> (whitespace)*
//! coord-block := "(" (ws)* <digits> (ws)* "," (ws)* <digits> (ws)* ")" (ws)*
//! ```
//!
//! `^` anchors at the start of the whole input, not at line starts.

use regex::Regex;
use std::sync::LazyLock;

/// Grid block as stripped by the validator, including trailing whitespace
pub(crate) static GRID_BLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+x\d+\s*").unwrap());

/// Grid block as read by the parser, capturing both dimensions
pub(crate) static GRID_HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)x(\d+)").unwrap());

/// One `(x, y)` delivery point, unsigned integers only
pub(crate) static COORDINATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(\d+)\s*,\s*(\d+)\s*\)").unwrap());
