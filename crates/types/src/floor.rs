//! Floor labels and the building they belong to.

use std::fmt;

/// A floor label in skip-zero numbering.
///
/// Basement floors are negative (`-1` is directly below `1`), above-ground
/// floors are positive. Label `0` does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Floor(pub i32);

impl Floor {
    /// The ground floor, where the elevator starts.
    pub const GROUND: Floor = Floor(1);

    /// Get the raw label.
    pub fn label(&self) -> i32 {
        self.0
    }

    /// Position on a gapless axis where `1` maps to `0` and `-1` to `-1`.
    fn ordinal(self) -> i64 {
        let label = i64::from(self.0);
        if label > 0 {
            label - 1
        } else {
            label
        }
    }

    /// Number of physical floors between `self` and `other`.
    ///
    /// `Floor(-1).distance(Floor(1))` is 1: the missing label `0` is not a floor.
    pub fn distance(self, other: Floor) -> u32 {
        self.ordinal().abs_diff(other.ordinal()) as u32
    }

    /// Whether `other` is exactly one physical floor away.
    pub fn is_adjacent(self, other: Floor) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense zero-based floor index used inside the timing simulator.
///
/// The lowest basement maps to `0` and the top floor to
/// `basement_floors + top_floor - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FloorCoordinate(pub usize);

impl FloorCoordinate {
    /// Get the array index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The shape of the building a data set is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    /// Number of basement floors (`-1` down to `-basement_floors`).
    pub basement_floors: u32,

    /// Highest above-ground floor label.
    pub top_floor: u32,
}

impl Default for Building {
    fn default() -> Self {
        Self {
            basement_floors: 3,
            top_floor: 16,
        }
    }
}

impl Building {
    /// Whether the label names a real floor of this building.
    pub fn contains(&self, floor: Floor) -> bool {
        let label = i64::from(floor.0);
        (-i64::from(self.basement_floors)..=-1).contains(&label)
            || (1..=i64::from(self.top_floor)).contains(&label)
    }

    /// Total number of floors, and the size of any coordinate-indexed table.
    pub fn coordinate_count(&self) -> usize {
        (self.basement_floors + self.top_floor) as usize
    }

    /// Map a label to its dense coordinate, or `None` if the floor does not exist.
    pub fn coordinate(&self, floor: Floor) -> Option<FloorCoordinate> {
        if !self.contains(floor) {
            return None;
        }
        let index = floor.ordinal() + i64::from(self.basement_floors);
        Some(FloorCoordinate(index as usize))
    }
}
