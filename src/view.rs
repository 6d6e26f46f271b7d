//! Render-free view model.
//!
//! Flattens the board into positioned, colored, labeled blocks that any
//! renderer can draw directly: one lane per tour plus the pool row and
//! the hour axis. Rebuilt from scratch after every dispatch, so displayed
//! positions always reflect the latest committed assignment state.

use serde::{Deserialize, Serialize};

use crate::board::TimelineBoard;
use crate::layout::{self, HourBlock, Placement};
use crate::models::{CarrierClass, Operation, OperationKind};

/// Fill color for a block, keyed on kind and carrier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    /// Rest breaks.
    Rest,
    /// Light-carrier work segments.
    LightCarrier,
    /// Heavy-carrier work segments.
    HeavyCarrier,
}

impl BlockColor {
    /// Picks the color for an operation.
    pub fn for_operation(operation: &Operation) -> Self {
        match operation.kind {
            OperationKind::Rest => Self::Rest,
            OperationKind::Work {
                carrier: CarrierClass::Light,
                ..
            } => Self::LightCarrier,
            OperationKind::Work {
                carrier: CarrierClass::Heavy,
                ..
            } => Self::HeavyCarrier,
        }
    }

    /// CSS rgba value for the color.
    pub fn rgba(self) -> &'static str {
        match self {
            Self::Rest => "rgba(224, 118, 236, 0.8)",
            Self::LightCarrier => "rgba(0, 123, 255, 0.8)",
            Self::HeavyCarrier => "rgba(218, 136, 13, 0.8)",
        }
    }
}

/// One drawable operation block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Backing operation id, used as the drag identifier.
    pub operation_id: u32,
    /// Horizontal position on the 24-hour axis. Pool rows typically use
    /// only the width component.
    pub placement: Placement,
    /// Fill color.
    pub color: BlockColor,
    /// Display text: `HH:MM - HH:MM` for work, `rest HH:MM` for breaks.
    pub label: String,
    /// Whether the block may start a drag (edit mode only).
    pub draggable: bool,
}

/// One tour lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// Backing tour id, used as the drop-target identifier.
    pub tour_id: u32,
    /// Positioned blocks, in the tour's sequence order.
    pub blocks: Vec<Block>,
    /// Empty lanes render the removed-after-editing placeholder instead.
    pub empty: bool,
}

/// The full board, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    /// First tour's begin date, ISO-formatted. `None` with no tours.
    pub date_label: Option<String>,
    /// The 24 hour-axis segments.
    pub axis: Vec<HourBlock>,
    /// Tour lanes, in display order.
    pub lanes: Vec<Lane>,
    /// Unassigned blocks, in pool order.
    pub pool: Vec<Block>,
    /// Whether editing gestures are currently enabled.
    pub edit_mode: bool,
}

fn block(operation: &Operation, draggable: bool) -> Block {
    let label = match operation.kind {
        OperationKind::Rest => format!("rest {}", operation.window.begin.format("%H:%M")),
        OperationKind::Work { .. } => format!(
            "{} - {}",
            operation.window.begin.format("%H:%M"),
            operation.window.end.format("%H:%M")
        ),
    };
    Block {
        operation_id: operation.id,
        placement: layout::place(operation.window.begin, operation.window.end),
        color: BlockColor::for_operation(operation),
        label,
        draggable,
    }
}

/// Builds the view model for the board's current state.
pub fn board_view(board: &TimelineBoard) -> BoardView {
    let draggable = board.is_edit_mode();
    BoardView {
        date_label: board
            .tours
            .first()
            .map(|t| t.window.begin.format("%Y-%m-%d").to_string()),
        axis: layout::hour_axis(),
        lanes: board
            .tours
            .iter()
            .map(|tour| Lane {
                tour_id: tour.id,
                blocks: tour.operations.iter().map(|op| block(op, draggable)).collect(),
                empty: tour.is_empty(),
            })
            .collect(),
        pool: board.pool.iter().map(|op| block(op, draggable)).collect(),
        edit_mode: draggable,
    }
}
