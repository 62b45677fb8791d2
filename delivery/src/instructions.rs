//! Route instruction synthesis
//!
//! Walks the delivery points in input order starting from the origin. Each
//! leg moves along x first (`N`/`S`), then along y (`E`/`W`), then drops a
//! pizza (`D`). Points are never reordered.

use serde::{Deserialize, Serialize};

use crate::grid::Coordinate;
use crate::log::DeliveryLog;

/// Returned in place of an empty instruction string
pub const NO_DELIVERIES_MESSAGE: &str = "There were no valid delivery points found in the input!";

/// Longest route the planner will synthesize
pub const MAX_ROUTE_LENGTH: u64 = 10_000_000;

/// One step of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// +1 on x
    North,
    /// -1 on x
    South,
    /// +1 on y
    East,
    /// -1 on y
    West,
    /// Drop a pizza at the current position
    Drop,
}

impl Instruction {
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
            Self::Drop => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            'D' => Some(Self::Drop),
            _ => None,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Number of instructions [`plan_route`] would emit, saturating at
/// `u64::MAX`. Computed without allocating.
pub fn route_length(coordinates: &[Coordinate]) -> u64 {
    let mut length: u64 = 0;
    let mut current = Coordinate::ORIGIN;
    for &next in coordinates {
        length = length
            .saturating_add(next.x.abs_diff(current.x))
            .saturating_add(next.y.abs_diff(current.y))
            .saturating_add(1);
        current = next;
    }
    length
}

/// Build the step list visiting `coordinates` in order from the origin.
pub fn plan_route(coordinates: &[Coordinate]) -> Vec<Instruction> {
    let mut route = Vec::new();
    let mut current = Coordinate::ORIGIN;

    for &next in coordinates {
        push_leg(
            &mut route,
            next.x - current.x,
            Instruction::North,
            Instruction::South,
        );
        push_leg(
            &mut route,
            next.y - current.y,
            Instruction::East,
            Instruction::West,
        );
        route.push(Instruction::Drop);
        current = next;
    }

    route
}

/// A zero delta pushes nothing.
fn push_leg(route: &mut Vec<Instruction>, delta: i64, forward: Instruction, back: Instruction) {
    let step = if delta > 0 { forward } else { back };
    route.extend(std::iter::repeat(step).take(delta.unsigned_abs() as usize));
}

pub fn render(route: &[Instruction]) -> String {
    route.iter().map(|i| i.as_char()).collect()
}

/// Replay a route from the origin, returning every drop position.
pub fn replay(route: &[Instruction]) -> Vec<Coordinate> {
    let mut current = Coordinate::ORIGIN;
    let mut drops = Vec::new();
    for instruction in route {
        match instruction {
            Instruction::North => current.x += 1,
            Instruction::South => current.x -= 1,
            Instruction::East => current.y += 1,
            Instruction::West => current.y -= 1,
            Instruction::Drop => drops.push(current),
        }
    }
    drops
}

/// Render the instruction string for `coordinates` and report it to `log`.
///
/// An empty route yields [`NO_DELIVERIES_MESSAGE`].
pub fn synthesize(coordinates: &[Coordinate], log: &impl DeliveryLog) -> String {
    let instructions = if coordinates.is_empty() {
        NO_DELIVERIES_MESSAGE.to_string()
    } else {
        render(&plan_route(coordinates))
    };

    log.info(&format!("Delivery instructions are: {instructions}"));
    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LogLevel, RecordingLog};

    fn coords(points: &[(i64, i64)]) -> Vec<Coordinate> {
        points.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_synthesize_reference_route() {
        let log = RecordingLog::new();
        let points = coords(&[
            (0, 0),
            (1, 3),
            (4, 4),
            (4, 2),
            (4, 2),
            (0, 1),
            (3, 2),
            (2, 3),
            (4, 1),
        ]);
        assert_eq!(
            synthesize(&points, &log),
            "DNEEEDNNNEDWWDDSSSSWDNNNEDSEDNNWWD"
        );
        assert_eq!(
            log.messages(LogLevel::Info),
            vec!["Delivery instructions are: DNEEEDNNNEDWWDDSSSSWDNNNEDSEDNNWWD"]
        );
    }

    #[test]
    fn test_synthesize_empty() {
        let log = RecordingLog::new();
        assert_eq!(synthesize(&[], &log), NO_DELIVERIES_MESSAGE);
        assert_eq!(log.records().len(), 1);
    }

    #[test]
    fn test_origin_delivery_is_single_drop() {
        assert_eq!(render(&plan_route(&coords(&[(0, 0)]))), "D");
    }

    #[test]
    fn test_zero_delta_emits_nothing() {
        // Same x: no N/S at all, same y: no E/W at all
        assert_eq!(render(&plan_route(&coords(&[(2, 0)]))), "NND");
        assert_eq!(render(&plan_route(&coords(&[(0, 2)]))), "EED");
        assert_eq!(render(&plan_route(&coords(&[(1, 3), (1, 3)]))), "NEEEDD");
    }

    #[test]
    fn test_order_is_preserved() {
        let forward = coords(&[(1, 3), (2, 2), (0, 4)]);
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(render(&plan_route(&forward)), "NEEEDNWDSSEED");
        assert_eq!(render(&plan_route(&reversed)), "EEEEDNNWWDSED");
    }

    #[test]
    fn test_route_length_matches_rendered_route() {
        let cases = [
            coords(&[]),
            coords(&[(0, 0)]),
            coords(&[(1, 3), (1, 3), (2, 2), (0, 4)]),
            coords(&[(0, 0), (1, 3), (4, 4), (4, 2), (4, 2), (0, 1), (3, 2), (2, 3), (4, 1)]),
        ];
        for points in cases {
            assert_eq!(route_length(&points), plan_route(&points).len() as u64);
        }
    }

    #[test]
    fn test_route_length_saturates() {
        let points = coords(&[(i64::MAX, i64::MAX), (0, 0), (i64::MAX, i64::MAX)]);
        assert_eq!(route_length(&points), u64::MAX);
    }

    #[test]
    fn test_replay_visits_each_point() {
        let points = coords(&[(3, 1), (0, 0), (2, 2), (2, 2), (5, 0)]);
        assert_eq!(replay(&plan_route(&points)), points);
    }

    #[test]
    fn test_char_mapping() {
        for c in ['N', 'S', 'E', 'W', 'D'] {
            let instruction = Instruction::from_char(c).unwrap();
            assert_eq!(instruction.as_char(), c);
            assert_eq!(instruction.to_string(), c.to_string());
        }
        assert_eq!(Instruction::from_char('X'), None);
    }
}
