#![doc = document_features::document_features!()]
//! Nesting of flat parts onto rectangular stock sheets.
//!
//! The pipeline has two stages connected by an explicit handoff:
//! the [`rotation`] stage searches, for every part independently, the orientation with the
//! smallest axis-aligned footprint, and the [`packing`] stage arranges those footprints
//! row by row across as many sheets as needed.

/// Geometric primitives and the kernel traits the pipeline relies on
pub mod geometry;

/// Entities modelling parts, footprints, sheets and placements
pub mod entities;

/// Per-part rotation search minimizing the bounding footprint
pub mod rotation;

/// Deterministic shelf packing of footprints across sheets
pub mod packing;

/// Importing instances into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;
mod pipeline;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use pipeline::{NestOutput, nest};
