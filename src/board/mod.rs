//! Board state and gesture handling.
//!
//! - **`store`**: the `TimelineBoard` state container and its mutation
//!   primitives (move, remove, add, delete, prune, mode toggle)
//! - **`action`**: typed gesture values (`MoveIntent`, `Action`) and the
//!   dispatch entry point
//! - **`seed`**: the fixed demo dataset loaded at startup

mod action;
pub(crate) mod seed;
mod store;

pub use action::{Action, DragOrigin, MoveIntent};
pub use store::{EditMode, OperationHome, TimelineBoard};
