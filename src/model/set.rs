//! The assembled polygon set.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{AdjacencyIndex, PolygonId, PolygonRecord, VertexTable};
use crate::error::PolysetError;

/// The immutable, fully validated output of a single load.
///
/// Everything inside has already been cross-checked: every boundary vertex
/// id resolves in the vertex table, and every adjacency entry names a real
/// shared edge of both polygons. Downstream consumers only read.
#[derive(Clone, Debug, Serialize)]
pub struct PolygonSet {
    vertices: VertexTable,
    polygons: BTreeMap<PolygonId, PolygonRecord>,
    adjacency: AdjacencyIndex,
}

impl PolygonSet {
    pub(crate) fn new(
        vertices: VertexTable,
        polygons: BTreeMap<PolygonId, PolygonRecord>,
        adjacency: AdjacencyIndex,
    ) -> Self {
        Self {
            vertices,
            polygons,
            adjacency,
        }
    }

    /// The canonical vertex store.
    pub fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    /// All polygons, keyed by id in ascending order.
    pub fn polygons(&self) -> &BTreeMap<PolygonId, PolygonRecord> {
        &self.polygons
    }

    /// A single polygon by id.
    pub fn polygon(&self, id: PolygonId) -> Option<&PolygonRecord> {
        self.polygons.get(&id)
    }

    /// The validated adjacency index.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Number of polygons in the set.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Number of unique vertices in the set.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Serializes the whole model as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the whole model as JSON to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), PolysetError> {
        let json = self
            .to_json_string()
            .map_err(|source| PolysetError::ModelJsonWrite {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, json).map_err(PolysetError::Io)
    }
}
