//! Canonical store of unique vertices keyed by id.
//!
//! Polygons reference vertices by id only; the table owns the coordinates.
//! Two insertions with the same id must agree exactly on coordinates, which
//! is what makes "shared vertex" a checked property rather than a convention.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{Point, VertexId};
use crate::error::PolysetError;

/// Append-only table of unique vertices.
///
/// Iteration order is ascending by id, so output derived from the table is
/// reproducible across runs.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct VertexTable {
    vertices: BTreeMap<VertexId, Point>,
}

impl VertexTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex, or reconciles it against an existing entry.
    ///
    /// A new id is stored and returned. An existing id returns the stored
    /// point only if the coordinates match exactly; otherwise the insertion
    /// fails with [`PolysetError::VertexConflict`].
    pub fn insert(&mut self, id: VertexId, point: Point) -> Result<Point, PolysetError> {
        match self.vertices.get(&id) {
            None => {
                self.vertices.insert(id, point);
                Ok(point)
            }
            Some(&existing) if existing == point => Ok(existing),
            Some(&existing) => Err(PolysetError::VertexConflict {
                vertex: id,
                existing,
                incoming: point,
            }),
        }
    }

    /// Looks up the coordinates of a vertex id.
    pub fn lookup(&self, id: VertexId) -> Result<Point, PolysetError> {
        self.vertices
            .get(&id)
            .copied()
            .ok_or(PolysetError::UnknownVertex { vertex: id })
    }

    /// Number of stored vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if no vertices are stored.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates vertices in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.vertices.iter().map(|(&id, &point)| (id, point))
    }
}
