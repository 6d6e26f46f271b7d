//! Tour model.
//!
//! A tour is a named bucket owning an ordered sequence of operations —
//! one vehicle/day's schedule as a lane on the board. Ownership is
//! exclusive: an operation sits in exactly one tour's sequence or in the
//! unassigned pool.

use serde::{Deserialize, Serialize};

use super::{Operation, TimeWindow};

/// A tour: one lane of the timeline board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Unique tour identifier.
    pub id: u32,
    /// Display window for the tour's day; drives the date header, not
    /// per-operation layout.
    pub window: TimeWindow,
    /// Owned operations, in display order.
    pub operations: Vec<Operation>,
}

impl Tour {
    /// Creates an empty tour covering the given display window.
    pub fn new(id: u32, window: TimeWindow) -> Self {
        Self {
            id,
            window,
            operations: Vec::new(),
        }
    }

    /// Adds an operation at the end of the sequence.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Whether this tour owns the given operation.
    pub fn contains_operation(&self, operation_id: u32) -> bool {
        self.operations.iter().any(|op| op.id == operation_id)
    }

    /// Removes and returns the operation with the given id, if owned.
    ///
    /// Remaining operations keep their relative order.
    pub fn take_operation(&mut self, operation_id: u32) -> Option<Operation> {
        let idx = self.operations.iter().position(|op| op.id == operation_id)?;
        Some(self.operations.remove(idx))
    }

    /// Whether the tour owns no operations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of owned operations.
    #[inline]
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{datetime, CarrierClass};

    fn day_window() -> TimeWindow {
        TimeWindow::new(datetime(2024, 4, 19, 0, 0), datetime(2024, 4, 19, 23, 59))
    }

    fn sample_tour() -> Tour {
        Tour::new(1, day_window())
            .with_operation(Operation::work(
                1,
                datetime(2024, 4, 19, 8, 0),
                datetime(2024, 4, 19, 12, 0),
                CarrierClass::Light,
            ))
            .with_operation(Operation::work(
                2,
                datetime(2024, 4, 19, 11, 0),
                datetime(2024, 4, 19, 13, 0),
                CarrierClass::Heavy,
            ))
    }

    #[test]
    fn test_tour_builder() {
        let tour = sample_tour();
        assert_eq!(tour.id, 1);
        assert_eq!(tour.operation_count(), 2);
        assert!(!tour.is_empty());
        assert!(tour.contains_operation(1));
        assert!(!tour.contains_operation(99));
    }

    #[test]
    fn test_take_operation_preserves_order() {
        let mut tour = sample_tour();
        let taken = tour.take_operation(1).unwrap();
        assert_eq!(taken.id, 1);
        assert_eq!(tour.operation_count(), 1);
        assert_eq!(tour.operations[0].id, 2);
    }

    #[test]
    fn test_take_operation_unknown_id() {
        let mut tour = sample_tour();
        assert!(tour.take_operation(99).is_none());
        assert_eq!(tour.operation_count(), 2);
    }

    #[test]
    fn test_empty_tour() {
        let tour = Tour::new(5, day_window());
        assert!(tour.is_empty());
        assert_eq!(tour.operation_count(), 0);
    }
}
