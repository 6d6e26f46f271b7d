//! Timeline board model for tour schedules.
//!
//! Renders a set of tours — each owning time-bounded operations (work
//! segments or rest breaks) — along a 24-hour horizontal axis, and lets
//! a host UI rearrange operations between tours by drag-and-drop while
//! in edit mode. Everything here is the widget's *model*: layout math,
//! assignment state, and gesture interpretation. Actual drawing and
//! pointer-event plumbing belong to the host.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Tour`, `Operation`, `TimeWindow`
//! - **`layout`**: Pure interval → percentage position/width mapping and
//!   the hour-axis generator
//! - **`board`**: The `TimelineBoard` state container, typed gesture
//!   actions, and the seeded demo dataset
//! - **`view`**: Render-free view model (lanes, colored blocks, labels)
//! - **`validation`**: Structural integrity checks (duplicate IDs,
//!   inverted intervals)
//!
//! # Concurrency
//!
//! Single-threaded and event-driven: each dispatched gesture mutates the
//! board to completion before the next one is handled, so moves never
//! interleave. Rebuild the view model after — never during — a dispatch.

pub mod board;
pub mod layout;
pub mod models;
pub mod validation;
pub mod view;
