//! Gesture actions and dispatch.
//!
//! The host UI translates pointer gestures into the typed values here: a
//! drag produces a `MoveIntent` at drag-start, the drop target supplies
//! the tour id, and `dispatch` applies the resulting `Action` to the
//! board. The intent is a plain value passed from the drag-start handler
//! to the drop handler on the single event thread — nothing is encoded
//! into transfer-payload strings.
//!
//! Dispatch gates every editing action on edit mode; in view mode only
//! the mode toggle has any effect.

use log::trace;
use serde::{Deserialize, Serialize};

use super::store::TimelineBoard;

/// Which container a drag started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOrigin {
    /// Dragged out of the unassigned pool.
    Pool,
    /// Dragged out of whichever tour holds the operation.
    Tour,
}

/// A drag in flight: the moved operation and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// The dragged operation.
    pub operation_id: u32,
    /// Source container kind.
    pub origin: DragOrigin,
}

/// A user gesture, ready to apply to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Flip between view and edit mode.
    ToggleEditMode,
    /// Append a new empty tour, window copied from the first tour.
    AddTour,
    /// Delete a tour; its operations return to the pool.
    DeleteTour { tour_id: u32 },
    /// Click-remove an operation from a tour back into the pool.
    RemoveFromTour { tour_id: u32, operation_id: u32 },
    /// Complete a drag onto a tour.
    Drop { intent: MoveIntent, tour_id: u32 },
}

impl TimelineBoard {
    /// Starts a drag for an operation.
    ///
    /// Returns `None` outside edit mode — blocks are not draggable while
    /// viewing.
    pub fn begin_drag(&self, operation_id: u32, origin: DragOrigin) -> Option<MoveIntent> {
        if !self.is_edit_mode() {
            trace!("drag of {operation_id} ignored: view mode");
            return None;
        }
        Some(MoveIntent {
            operation_id,
            origin,
        })
    }

    /// Completes a drag onto the tour under the pointer.
    ///
    /// The origin picks the source resolution path: a tour-origin drag
    /// scans the tours for the holder, a pool-origin drag drains the
    /// pool. Both append at the destination's end. Unresolved ids are
    /// silent no-ops.
    pub fn drop_on_tour(&mut self, intent: MoveIntent, tour_id: u32) -> bool {
        match intent.origin {
            DragOrigin::Tour => self.move_from_tours(intent.operation_id, tour_id),
            DragOrigin::Pool => self.assign_from_pool(intent.operation_id, tour_id),
        }
    }

    /// Creates a tour seeded with the first existing tour's window.
    ///
    /// A convenience default, not user-chosen. No-op when the board has
    /// no tour to copy a window from.
    pub fn add_tour_like_first(&mut self) -> Option<u32> {
        let window = self.tours.first().map(|t| t.window)?;
        Some(self.add_tour(window))
    }

    /// Applies one gesture to the board.
    ///
    /// Editing actions are ignored in view mode; the toggle always
    /// applies (and prunes empty tours on the way out of edit mode).
    pub fn dispatch(&mut self, action: Action) {
        if action != Action::ToggleEditMode && !self.is_edit_mode() {
            trace!("{action:?} ignored: view mode");
            return;
        }
        match action {
            Action::ToggleEditMode => self.toggle_mode(),
            Action::AddTour => {
                self.add_tour_like_first();
            }
            Action::DeleteTour { tour_id } => {
                self.delete_tour(tour_id);
            }
            Action::RemoveFromTour {
                tour_id,
                operation_id,
            } => {
                self.remove_from_tour(tour_id, operation_id);
            }
            Action::Drop { intent, tour_id } => {
                self.drop_on_tour(intent, tour_id);
            }
        }
    }
}
