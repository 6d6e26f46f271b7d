//! Operation model.
//!
//! An operation is the atomic schedulable unit on the board: either a
//! work segment bound to a carrier class, or a rest break. Each occupies
//! a time window and belongs to at most one tour at any instant (or to
//! the unassigned pool — never both).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A single scheduled work segment or rest break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique operation identifier, stable for the record's lifetime.
    pub id: u32,
    /// Occupied time interval. Well-formed data has `end >= begin`.
    pub window: TimeWindow,
    /// Work or rest, with work-only detail carried in the variant.
    pub kind: OperationKind,
}

/// Classification of an operation.
///
/// Work-only fields (carrier class, endpoints) live on the `Work`
/// variant rather than as conditionally-absent fields on `Operation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperationKind {
    /// A driving/work segment.
    Work {
        /// Vehicle class assigned to the segment.
        carrier: CarrierClass,
        /// Departure point, when known.
        start_location: Option<Location>,
        /// Arrival point, when known.
        goal_location: Option<Location>,
    },
    /// A rest break.
    Rest,
}

/// Vehicle class for work operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarrierClass {
    /// Light truck (the original data's 4t class).
    Light,
    /// Heavy truck (the original data's 10t class).
    Heavy,
}

/// An opaque named place referenced by work operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Display name.
    pub name: String,
}

impl Location {
    /// Creates a named location.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Operation {
    /// Creates a work operation with the given carrier class.
    pub fn work(id: u32, begin: NaiveDateTime, end: NaiveDateTime, carrier: CarrierClass) -> Self {
        Self {
            id,
            window: TimeWindow::new(begin, end),
            kind: OperationKind::Work {
                carrier,
                start_location: None,
                goal_location: None,
            },
        }
    }

    /// Creates a rest operation.
    pub fn rest(id: u32, begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id,
            window: TimeWindow::new(begin, end),
            kind: OperationKind::Rest,
        }
    }

    /// Sets the start location (work operations only; no-op for rests).
    pub fn with_start_location(mut self, location: Location) -> Self {
        if let OperationKind::Work { start_location, .. } = &mut self.kind {
            *start_location = Some(location);
        }
        self
    }

    /// Sets the goal location (work operations only; no-op for rests).
    pub fn with_goal_location(mut self, location: Location) -> Self {
        if let OperationKind::Work { goal_location, .. } = &mut self.kind {
            *goal_location = Some(location);
        }
        self
    }

    /// Whether this is a rest break.
    #[inline]
    pub fn is_rest(&self) -> bool {
        matches!(self.kind, OperationKind::Rest)
    }

    /// The carrier class, for work operations.
    pub fn carrier(&self) -> Option<CarrierClass> {
        match self.kind {
            OperationKind::Work { carrier, .. } => Some(carrier),
            OperationKind::Rest => None,
        }
    }

    /// Occupied duration in milliseconds (negative if the window is inverted).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.window.duration_ms()
    }
}
