//! Pizzabot delivery library
//!
//! Turns a textual delivery request into movement instructions:
//! - Validation: anything outside the request grammar is reported verbatim
//! - Parsing: the leading `WxH` grid block, then every `(x, y)` delivery point
//! - Synthesis: a route over {N, S, E, W, D} visiting the points in order
//!
//! # Request format
//!
//! ```text
//! 5x5 (0, 0) (1, 3) (4, 4)
//! ```
//!
//! The grid bounds are inclusive: `5x5` accepts x and y in `0..=5`. N/S move
//! along x, E/W move along y, D drops a pizza.
//!
//! # Usage
//!
//! ```
//! use delivery::{DeliveryPlanner, RecordingLog};
//!
//! let planner = DeliveryPlanner::new(RecordingLog::new());
//! assert_eq!(planner.delivery_instructions("5x5 (0, 0) (1, 3)"), "DNEEED");
//! ```

pub mod error;
pub mod grid;
pub mod instructions;
pub mod log;
pub mod parser;
pub mod planner;
mod syntax;
pub mod validator;

pub use error::{DeliveryError, DeliveryResult};
pub use grid::{Axis, Coordinate, GridDimensions};
pub use instructions::{
    plan_route, render, replay, route_length, synthesize, Instruction, MAX_ROUTE_LENGTH,
    NO_DELIVERIES_MESSAGE,
};
pub use log::{DeliveryLog, LogLevel, LogRecord, RecordingLog, TracingLog};
pub use parser::{parse_coordinates, parse_grid};
pub use planner::{get_delivery_instructions, DeliveryPlanner, DeliveryReport};
pub use validator::{find_residue, has_incorrect_items};
