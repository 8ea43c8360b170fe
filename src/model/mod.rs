//! In-memory geometric model for loaded polygon sets.
//!
//! This module defines the validated representation a load produces. The
//! central design decision is that vertices live in one arena-style table
//! ([`VertexTable`]) and polygons reference them only by id: shared vertices
//! are deduplicated rather than copied, and "two polygons share a vertex" is
//! a checkable fact instead of a floating-point coincidence.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Newtype ids ([`VertexId`], [`PolygonId`]) prevent
//!    mixing up the two id spaces at compile time.
//!
//! 2. **Checked Assembly**: Construction validates shape (degenerate
//!    boundaries, conflicting vertices, unsupported adjacency) up front, so
//!    a [`PolygonSet`] in hand is consistent by construction.
//!
//! 3. **Deterministic Iteration**: All collections are BTree-based; two
//!    loads of identical input produce identical iteration order.

mod adjacency;
mod ids;
mod point;
mod polygon;
mod set;
mod vertex_table;

// Re-export core types for convenient access
pub use adjacency::{AdjacencyEntry, AdjacencyIndex, DeclaredAdjacency};
pub use ids::{PolygonId, VertexId};
pub use point::Point;
pub use polygon::{Edge, PolygonRecord};
pub use set::PolygonSet;
pub use vertex_table::VertexTable;
