//! Delivery error types
//!
//! Every parsing stage returns a [`DeliveryResult`]. The planner decides how
//! each variant is surfaced to the caller: format errors become the
//! "input in incorrect format" report, everything else is reported as an
//! unexpected termination.

use std::num::ParseIntError;

use thiserror::Error;

use crate::grid::{Axis, Coordinate, GridDimensions};

/// Result type alias for delivery operations
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Errors raised while turning raw input into a delivery route
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// No `<digits>x<digits>` block at the very start of the input
    #[error("Unable to find grid settings at start of input string: {input}")]
    GridNotFound { input: String },

    /// Grid dimension below zero
    #[error("Invalid grid input: {value} Only positive integers allowed.")]
    InvalidGridDimension { value: i64 },

    /// Delivery point outside the declared grid
    #[error("{axis}-coord exceeds grid size. Destination: {coordinate} in grid {grid}")]
    CoordinateOutOfBounds {
        axis: Axis,
        coordinate: Coordinate,
        grid: GridDimensions,
    },

    /// Delivery point with a value too large to represent, always off the grid
    #[error("{axis}-coord exceeds grid size. Destination: {destination} in grid {grid}")]
    CoordinateTooLarge {
        axis: Axis,
        destination: String,
        grid: GridDimensions,
    },

    /// Digit run that is not a usable integer
    #[error("Invalid number '{literal}': {source}")]
    InvalidNumber {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    /// Route would need more instructions than the planner will emit
    #[error("Route needs {length} instructions, more than the limit of {limit}")]
    RouteTooLong { length: u64, limit: u64 },
}

impl DeliveryError {
    /// Create a grid not found error
    pub fn grid_not_found(input: impl Into<String>) -> Self {
        Self::GridNotFound {
            input: input.into(),
        }
    }

    /// Create an out of bounds error for the given axis
    pub fn out_of_bounds(axis: Axis, coordinate: Coordinate, grid: GridDimensions) -> Self {
        Self::CoordinateOutOfBounds {
            axis,
            coordinate,
            grid,
        }
    }

    /// Create an out of bounds error for a value that does not fit in `i64`
    pub fn coordinate_too_large(
        axis: Axis,
        destination: impl Into<String>,
        grid: GridDimensions,
    ) -> Self {
        Self::CoordinateTooLarge {
            axis,
            destination: destination.into(),
            grid,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(literal: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidNumber {
            literal: literal.into(),
            source,
        }
    }

    /// Whether the error means the input is structurally wrong, as opposed
    /// to an unexpected failure while processing well-formed input.
    pub fn is_format_error(&self) -> bool {
        match self {
            Self::GridNotFound { .. }
            | Self::InvalidGridDimension { .. }
            | Self::CoordinateOutOfBounds { .. }
            | Self::CoordinateTooLarge { .. }
            | Self::InvalidNumber { .. } => true,
            Self::RouteTooLong { .. } => false,
        }
    }

    /// Diagnostic trace for the log sink: the debug form of the error
    /// followed by its `source()` chain.
    pub fn trace(&self) -> String {
        let mut trace = format!("{:?}", self);
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            trace.push_str("\ncaused by: ");
            trace.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        trace
    }
}
