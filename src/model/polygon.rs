//! Polygon boundaries and the edges derived from them.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::{Point, PolygonId, VertexId, VertexTable};
use crate::error::PolysetError;

/// An unordered pair of vertex ids, normalized so the smaller id comes first.
///
/// Edges are derived from consecutive boundary positions (including the
/// wrap-around from last to first) and used only as lookup keys; they are
/// never stored independently of the boundaries that imply them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// Creates a normalized edge between two vertex ids.
    pub fn new(u: VertexId, v: VertexId) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// The endpoints in normalized (ascending) order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// An ordered polygon boundary: a cycle of vertex ids.
///
/// Immutable once built. The boundary wraps from the last id back to the
/// first; the closing id is implied, never stored.
#[derive(Clone, Debug, Serialize)]
pub struct PolygonRecord {
    id: PolygonId,
    boundary: Vec<VertexId>,
}

impl PolygonRecord {
    /// Builds a polygon record, validating the boundary shape.
    ///
    /// Fails with [`PolysetError::DegeneratePolygon`] when the boundary has
    /// fewer than 3 distinct vertex ids or contains a zero-length edge
    /// (two consecutive positions, wrap-around included, with the same id).
    ///
    /// Self-intersection and convexity are not checked here; they are
    /// downstream algorithmic concerns, not load-time data defects.
    pub fn build(id: PolygonId, boundary: Vec<VertexId>) -> Result<Self, PolysetError> {
        if boundary.len() < 3 {
            return Err(PolysetError::DegeneratePolygon {
                polygon: id,
                message: format!("boundary has {} vertices, need at least 3", boundary.len()),
            });
        }

        for i in 0..boundary.len() {
            let u = boundary[i];
            let v = boundary[(i + 1) % boundary.len()];
            if u == v {
                return Err(PolysetError::DegeneratePolygon {
                    polygon: id,
                    message: format!("zero-length edge at vertex {}", u),
                });
            }
        }

        let distinct: BTreeSet<VertexId> = boundary.iter().copied().collect();
        if distinct.len() < 3 {
            return Err(PolysetError::DegeneratePolygon {
                polygon: id,
                message: format!(
                    "boundary has only {} distinct vertices, need at least 3",
                    distinct.len()
                ),
            });
        }

        Ok(Self { id, boundary })
    }

    /// The polygon's stable id.
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// The boundary as an ordered slice of vertex ids.
    pub fn boundary(&self) -> &[VertexId] {
        &self.boundary
    }

    /// Number of boundary vertices.
    pub fn vertex_count(&self) -> usize {
        self.boundary.len()
    }

    /// Iterates the normalized boundary edges, wrap-around included.
    pub fn boundary_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.boundary.len();
        (0..n).map(move |i| Edge::new(self.boundary[i], self.boundary[(i + 1) % n]))
    }

    /// Collects the boundary edges into a set for intersection queries.
    pub fn edge_set(&self) -> BTreeSet<Edge> {
        self.boundary_edges().collect()
    }

    /// The vertex centroid of the boundary.
    pub fn centroid(&self, vertices: &VertexTable) -> Result<(f64, f64), PolysetError> {
        let mut cx = 0.0;
        let mut cy = 0.0;
        for &id in &self.boundary {
            let point = vertices.lookup(id)?;
            cx += point.x as f64;
            cy += point.y as f64;
        }
        let n = self.boundary.len() as f64;
        Ok((cx / n, cy / n))
    }

    /// The directed edge vectors walking the boundary, wrap-around included.
    pub fn edge_vectors(&self, vertices: &VertexTable) -> Result<Vec<Point>, PolysetError> {
        let n = self.boundary.len();
        let mut vectors = Vec::with_capacity(n);
        for i in 0..n {
            let from = vertices.lookup(self.boundary[i])?;
            let to = vertices.lookup(self.boundary[(i + 1) % n])?;
            vectors.push(to.sub(from));
        }
        Ok(vectors)
    }

    /// Total boundary length.
    pub fn perimeter(&self, vertices: &VertexTable) -> Result<f64, PolysetError> {
        Ok(self
            .edge_vectors(vertices)?
            .into_iter()
            .map(Point::length)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    fn unit_square_table() -> VertexTable {
        let mut table = VertexTable::new();
        table.insert(VertexId(0), Point::new(0, 0)).unwrap();
        table.insert(VertexId(1), Point::new(10, 0)).unwrap();
        table.insert(VertexId(2), Point::new(10, 10)).unwrap();
        table.insert(VertexId(3), Point::new(0, 10)).unwrap();
        table
    }

    #[test]
    fn edge_is_orientation_insensitive() {
        assert_eq!(Edge::new(VertexId(2), VertexId(7)), Edge::new(VertexId(7), VertexId(2)));
        assert_eq!(Edge::new(VertexId(7), VertexId(2)).endpoints(), (VertexId(2), VertexId(7)));
    }

    #[test]
    fn build_rejects_fewer_than_three_vertices() {
        let err = PolygonRecord::build(PolygonId(1), ids(&[0, 1])).unwrap_err();
        assert!(matches!(err, PolysetError::DegeneratePolygon { .. }));
    }

    #[test]
    fn build_rejects_consecutive_repeats() {
        let err = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 1, 2])).unwrap_err();
        assert!(matches!(err, PolysetError::DegeneratePolygon { .. }));
    }

    #[test]
    fn build_rejects_closing_repeat() {
        // First == last is the wrap-around zero-length edge.
        let err = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 2, 0])).unwrap_err();
        assert!(matches!(err, PolysetError::DegeneratePolygon { .. }));
    }

    #[test]
    fn build_rejects_two_distinct_ids_masquerading_as_a_cycle() {
        let err = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 0, 1])).unwrap_err();
        assert!(matches!(err, PolysetError::DegeneratePolygon { .. }));
    }

    #[test]
    fn build_accepts_a_triangle() {
        let record = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 2])).unwrap();
        assert_eq!(record.vertex_count(), 3);
    }

    #[test]
    fn boundary_edges_include_wraparound() {
        let record = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 2, 3])).unwrap();
        let edges: Vec<Edge> = record.boundary_edges().collect();
        assert_eq!(edges.len(), 4);
        assert!(edges.contains(&Edge::new(VertexId(3), VertexId(0))));
    }

    #[test]
    fn centroid_and_perimeter_of_a_square() {
        let table = unit_square_table();
        let record = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 2, 3])).unwrap();

        let (cx, cy) = record.centroid(&table).unwrap();
        assert!((cx - 5.0).abs() < 1e-12);
        assert!((cy - 5.0).abs() < 1e-12);

        let perimeter = record.perimeter(&table).unwrap();
        assert!((perimeter - 40.0).abs() < 1e-12);
    }

    #[test]
    fn edge_vectors_walk_the_boundary() {
        let table = unit_square_table();
        let record = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 2, 3])).unwrap();

        let vectors = record.edge_vectors(&table).unwrap();
        assert_eq!(
            vectors,
            vec![
                Point::new(10, 0),
                Point::new(0, 10),
                Point::new(-10, 0),
                Point::new(0, -10),
            ]
        );
    }

    #[test]
    fn geometry_queries_fail_on_unknown_vertices() {
        let table = VertexTable::new();
        let record = PolygonRecord::build(PolygonId(1), ids(&[0, 1, 2])).unwrap();
        let err = record.centroid(&table).unwrap_err();
        assert!(matches!(err, PolysetError::UnknownVertex { .. }));
    }
}
