//! Board state container.
//!
//! `TimelineBoard` owns the full widget state: the tour lanes, the
//! unassigned pool, the edit mode, and the tour id counter. All mutation
//! goes through the methods here, and every method runs to completion on
//! the caller's thread — the event-driven host delivers one gesture at a
//! time, so moves never interleave.
//!
//! Unresolvable identifiers are silent no-ops throughout: the method
//! returns `false` and the state is left untouched. There is no fatal
//! path.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::models::{Operation, TimeWindow, Tour};

/// Interaction mode of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// Read-only: dragging and tour creation disabled.
    #[default]
    View,
    /// Drag-and-drop and tour creation enabled.
    Edit,
}

/// Where an operation currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationHome {
    /// Owned by the tour with this id.
    Tour(u32),
    /// In the unassigned pool.
    Pool,
}

/// The complete in-memory state of the timeline board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBoard {
    /// Tour lanes, in display order.
    pub tours: Vec<Tour>,
    /// Unassigned operations, in display order.
    pub pool: Vec<Operation>,
    /// Current interaction mode. Starts in `View`.
    pub mode: EditMode,
    /// Next tour id. Monotonically increasing, never reused.
    next_tour_id: u32,
}

impl TimelineBoard {
    /// Creates a board from initial tours and pool.
    ///
    /// The tour counter starts one past the highest existing tour id.
    pub fn new(tours: Vec<Tour>, pool: Vec<Operation>) -> Self {
        let next_tour_id = tours.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        Self {
            tours,
            pool,
            mode: EditMode::View,
            next_tour_id,
        }
    }

    /// Creates a board loaded with the fixed demo dataset.
    pub fn seeded() -> Self {
        Self::new(super::seed::seed_tours(), super::seed::seed_pool())
    }

    /// Whether the board is in edit mode.
    #[inline]
    pub fn is_edit_mode(&self) -> bool {
        self.mode == EditMode::Edit
    }

    /// The id the next created tour will receive.
    #[inline]
    pub fn next_tour_id(&self) -> u32 {
        self.next_tour_id
    }

    /// Looks up a tour by id.
    pub fn tour(&self, tour_id: u32) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == tour_id)
    }

    /// Finds the container currently holding an operation.
    pub fn locate_operation(&self, operation_id: u32) -> Option<OperationHome> {
        if let Some(tour) = self.tours.iter().find(|t| t.contains_operation(operation_id)) {
            return Some(OperationHome::Tour(tour.id));
        }
        if self.pool.iter().any(|op| op.id == operation_id) {
            return Some(OperationHome::Pool);
        }
        None
    }

    /// Total operation count across all tours and the pool.
    ///
    /// Invariant under every successful move: transfers only repartition,
    /// never create or drop records.
    pub fn operation_count(&self) -> usize {
        self.tours.iter().map(Tour::operation_count).sum::<usize>() + self.pool.len()
    }

    /// Moves an operation out of whichever tour holds it, appending it to
    /// the destination tour's sequence.
    ///
    /// Returns `false` (state untouched) if no tour holds the operation
    /// or the destination does not exist.
    pub fn move_from_tours(&mut self, operation_id: u32, destination_tour_id: u32) -> bool {
        if self.tour(destination_tour_id).is_none() {
            trace!("move {operation_id}: destination tour {destination_tour_id} not found");
            return false;
        }
        let Some(source_idx) = self
            .tours
            .iter()
            .position(|t| t.contains_operation(operation_id))
        else {
            trace!("move {operation_id}: no tour holds it");
            return false;
        };
        let Some(operation) = self.tours[source_idx].take_operation(operation_id) else {
            return false;
        };
        let source_id = self.tours[source_idx].id;
        self.append_to_tour(destination_tour_id, operation);
        debug!("moved operation {operation_id}: tour {source_id} -> tour {destination_tour_id}");
        true
    }

    /// Moves an operation from the pool onto a tour, appending at the end.
    ///
    /// Returns `false` (state untouched) if the operation is not pooled
    /// or the destination does not exist.
    pub fn assign_from_pool(&mut self, operation_id: u32, destination_tour_id: u32) -> bool {
        if self.tour(destination_tour_id).is_none() {
            trace!("assign {operation_id}: destination tour {destination_tour_id} not found");
            return false;
        }
        let Some(pool_idx) = self.pool.iter().position(|op| op.id == operation_id) else {
            trace!("assign {operation_id}: not in pool");
            return false;
        };
        let operation = self.pool.remove(pool_idx);
        self.append_to_tour(destination_tour_id, operation);
        debug!("assigned operation {operation_id}: pool -> tour {destination_tour_id}");
        true
    }

    /// Moves an operation to the destination tour, searching tours first
    /// and the pool second for the source.
    ///
    /// Always appends at the destination's end; drop position within the
    /// target is not tracked.
    pub fn move_operation(&mut self, operation_id: u32, destination_tour_id: u32) -> bool {
        self.move_from_tours(operation_id, destination_tour_id)
            || self.assign_from_pool(operation_id, destination_tour_id)
    }

    /// Removes an operation from the named tour back into the pool.
    ///
    /// Returns `false` (state untouched) if either id is unresolved.
    pub fn remove_from_tour(&mut self, tour_id: u32, operation_id: u32) -> bool {
        let Some(tour) = self.tours.iter_mut().find(|t| t.id == tour_id) else {
            trace!("remove {operation_id}: tour {tour_id} not found");
            return false;
        };
        let Some(operation) = tour.take_operation(operation_id) else {
            trace!("remove {operation_id}: tour {tour_id} does not hold it");
            return false;
        };
        self.pool.push(operation);
        debug!("removed operation {operation_id}: tour {tour_id} -> pool");
        true
    }

    /// Appends a new empty tour covering the given window.
    ///
    /// Returns the new tour's id. The counter increments on every call
    /// and ids are never reused, even after deletes.
    pub fn add_tour(&mut self, window: TimeWindow) -> u32 {
        let id = self.next_tour_id;
        self.next_tour_id += 1;
        self.tours.push(Tour::new(id, window));
        debug!("added tour {id}");
        id
    }

    /// Deletes a tour, returning its operations to the pool.
    ///
    /// Returns `false` if no such tour exists.
    pub fn delete_tour(&mut self, tour_id: u32) -> bool {
        let Some(idx) = self.tours.iter().position(|t| t.id == tour_id) else {
            trace!("delete: tour {tour_id} not found");
            return false;
        };
        let tour = self.tours.remove(idx);
        debug!(
            "deleted tour {tour_id}, {} operation(s) back to pool",
            tour.operation_count()
        );
        self.pool.extend(tour.operations);
        true
    }

    /// Drops every tour whose operation sequence is empty.
    ///
    /// Tours holding at least one operation are never pruned; survivors
    /// keep their relative order.
    pub fn prune_empty_tours(&mut self) {
        let before = self.tours.len();
        self.tours.retain(|t| !t.is_empty());
        let pruned = before - self.tours.len();
        if pruned > 0 {
            debug!("pruned {pruned} empty tour(s)");
        }
    }

    /// Toggles between view and edit mode.
    ///
    /// Leaving edit mode prunes empty tours — the only mutation not
    /// directly driven by a user gesture.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            EditMode::View => EditMode::Edit,
            EditMode::Edit => {
                self.prune_empty_tours();
                EditMode::View
            }
        };
        debug!("mode is now {:?}", self.mode);
    }

    fn append_to_tour(&mut self, tour_id: u32, operation: Operation) {
        // Callers verify the destination exists before removing from
        // the source.
        if let Some(tour) = self.tours.iter_mut().find(|t| t.id == tour_id) {
            tour.operations.push(operation);
        }
    }
}
