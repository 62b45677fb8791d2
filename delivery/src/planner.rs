//! Delivery planner
//!
//! Runs the whole pipeline for one raw input:
//!
//! ```text
//! raw ─→ find_residue ─→ parse_grid ─→ parse_coordinates ─→ synthesize ─→ report
//!             │               │                │
//!             └─ incorrect    └──── format / unexpected error ────┘
//!                items
//! ```
//!
//! [`DeliveryPlanner::plan`] always returns a [`DeliveryReport`]; failures
//! are values, never panics or `Err`s. The planner holds no per-request
//! state, so a single instance can serve any number of inputs.

use serde::{Deserialize, Serialize};

use crate::error::{DeliveryError, DeliveryResult};
use crate::grid::Coordinate;
use crate::instructions::{
    route_length, synthesize, MAX_ROUTE_LENGTH, NO_DELIVERIES_MESSAGE,
};
use crate::log::{DeliveryLog, TracingLog};
use crate::parser::{parse_coordinates, parse_grid};
use crate::validator::{find_residue, has_incorrect_items};

/// Outcome of planning one delivery run.
///
/// `Display` renders the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryReport {
    /// Route over {N, S, E, W, D}
    Instructions {
        instructions: String,
        deliveries: usize,
    },
    /// Valid input without any delivery points
    NoDeliveries,
    /// Text outside the recognised grammar, reported verbatim
    IncorrectItems { residue: String },
    /// Grid missing or misplaced, or a point off the grid
    IncorrectFormat { input: String, reason: String },
    /// Any other failure
    Terminated { error: String },
}

impl DeliveryReport {
    /// Whether the run produced a usable answer
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Instructions { .. } | Self::NoDeliveries)
    }
}

impl std::fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instructions { instructions, .. } => write!(f, "{instructions}"),
            Self::NoDeliveries => write!(f, "{NO_DELIVERIES_MESSAGE}"),
            Self::IncorrectItems { residue } => {
                write!(f, "Input contained the following incorrect items: {residue}")
            }
            Self::IncorrectFormat { input, .. } => write!(
                f,
                "Terminating application, input in incorrect format. Input: {input}. \
                 Check documentation for correct format"
            ),
            Self::Terminated { error } => write!(f, "Terminating application. Error: {error}"),
        }
    }
}

/// Plans delivery routes, reporting progress to an injected log sink
#[derive(Debug, Default)]
pub struct DeliveryPlanner<L: DeliveryLog = TracingLog> {
    log: L,
}

impl<L: DeliveryLog> DeliveryPlanner<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Instruction string or failure message for `raw`.
    pub fn delivery_instructions(&self, raw: &str) -> String {
        self.plan(raw).to_string()
    }

    /// Run the full pipeline on `raw`.
    pub fn plan(&self, raw: &str) -> DeliveryReport {
        let residue = find_residue(raw);
        if has_incorrect_items(&residue) {
            return DeliveryReport::IncorrectItems { residue };
        }

        match self.route(raw) {
            Ok(coordinates) => {
                let instructions = synthesize(&coordinates, &self.log);
                if coordinates.is_empty() {
                    DeliveryReport::NoDeliveries
                } else {
                    DeliveryReport::Instructions {
                        instructions,
                        deliveries: coordinates.len(),
                    }
                }
            }
            Err(err) => {
                self.log.error(&err.to_string(), Some(&err.trace()));
                if err.is_format_error() {
                    DeliveryReport::IncorrectFormat {
                        input: raw.to_string(),
                        reason: err.to_string(),
                    }
                } else {
                    DeliveryReport::Terminated {
                        error: err.to_string(),
                    }
                }
            }
        }
    }

    /// Parse the grid then the delivery points, logging each stage. Routes
    /// longer than [`MAX_ROUTE_LENGTH`] are rejected before synthesis.
    fn route(&self, raw: &str) -> DeliveryResult<Vec<Coordinate>> {
        let grid = parse_grid(raw)?;
        self.log.info(&format!("Grid dimensions are: {grid}"));

        let coordinates = parse_coordinates(raw, grid)?;
        self.log.info(&format!(
            "Delivery points are: [{}]",
            coordinates
                .iter()
                .map(Coordinate::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ));

        let length = route_length(&coordinates);
        if length > MAX_ROUTE_LENGTH {
            return Err(DeliveryError::RouteTooLong {
                length,
                limit: MAX_ROUTE_LENGTH,
            });
        }

        Ok(coordinates)
    }
}

/// [`DeliveryPlanner::delivery_instructions`] with the `tracing` sink.
pub fn get_delivery_instructions(raw: &str) -> String {
    DeliveryPlanner::new(TracingLog).delivery_instructions(raw)
}
