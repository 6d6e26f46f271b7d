//! Timeline board domain models.
//!
//! Core data types for the board: operations (work segments and rest
//! breaks), tours that own them, and the time windows both occupy.
//!
//! # Domain Mapping
//!
//! | tour-board | Logistics | Generic |
//! |------------|-----------|---------|
//! | Tour | Vehicle/day route | Lane |
//! | Operation | Transport leg / break | Block |
//! | Pool | Unassigned legs | Backlog |

mod operation;
mod time;
mod tour;

pub use operation::{CarrierClass, Location, Operation, OperationKind};
pub use time::{datetime, TimeWindow};
pub use tour::Tour;
