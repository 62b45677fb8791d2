//! Structured parsing of the grid block and delivery coordinates
//!
//! The grid stage returns the dimensions by value; the coordinate stage takes
//! them as an argument. Nothing is cached between calls.

use std::num::IntErrorKind;

use crate::error::{DeliveryError, DeliveryResult};
use crate::grid::{Axis, Coordinate, GridDimensions};
use crate::syntax::{COORDINATE_PATTERN, GRID_HEADER_PATTERN};

/// Read the `WxH` block that must open the input.
///
/// A dimension too large for `i64` is clamped to `i64::MAX`: every
/// representable coordinate fits inside it.
pub fn parse_grid(raw: &str) -> DeliveryResult<GridDimensions> {
    let captures = GRID_HEADER_PATTERN
        .captures(raw)
        .ok_or_else(|| DeliveryError::grid_not_found(raw))?;

    let grid = GridDimensions::new(
        parse_number(&captures[1])?.unwrap_or(i64::MAX),
        parse_number(&captures[2])?.unwrap_or(i64::MAX),
    );

    // Unreachable through the digit-only pattern, kept for callers that
    // construct dimensions from other sources.
    for value in [grid.x, grid.y] {
        if value < 0 {
            return Err(DeliveryError::InvalidGridDimension { value });
        }
    }

    Ok(grid)
}

/// Collect every `(x, y)` block in input order and bounds-check it against
/// `grid`. No blocks yields an empty route. The first offending point, in
/// input order, is reported.
pub fn parse_coordinates(raw: &str, grid: GridDimensions) -> DeliveryResult<Vec<Coordinate>> {
    COORDINATE_PATTERN
        .captures_iter(raw)
        .map(|captures| {
            let x = parse_number(&captures[1])?;
            let y = parse_number(&captures[2])?;

            let (x, y) = match (x, y) {
                (Some(x), Some(y)) => (x, y),
                // Too large for i64, so larger than any grid
                (x, _) => {
                    let axis = match x {
                        Some(x) if (0..=grid.x).contains(&x) => Axis::Y,
                        _ => Axis::X,
                    };
                    return Err(DeliveryError::coordinate_too_large(
                        axis,
                        &captures[0],
                        grid,
                    ));
                }
            };

            let coordinate = Coordinate::new(x, y);
            match grid.axis_out_of_bounds(&coordinate) {
                Some(axis) => Err(DeliveryError::out_of_bounds(axis, coordinate, grid)),
                None => Ok(coordinate),
            }
        })
        .collect()
}

/// Parse a digit run, returning `None` when it overflows `i64`.
fn parse_number(literal: &str) -> DeliveryResult<Option<i64>> {
    match literal.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(None),
        Err(e) => Err(DeliveryError::invalid_number(literal, e)),
    }
}
