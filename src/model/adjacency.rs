//! Validated polygon adjacency.
//!
//! The adjacency file declares that two polygons touch; it does not say
//! where. Building the index cross-checks every declaration against the
//! actual boundary geometry, turning a data-entry file into a checked
//! invariant: the declared pair must share exactly one boundary edge.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{Edge, PolygonId, PolygonRecord};
use crate::error::PolysetError;

/// A declared adjacency as parsed from the adjacency file, before
/// validation. `line` is the 1-based source line, kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclaredAdjacency {
    pub a: PolygonId,
    pub b: PolygonId,
    pub line: usize,
}

/// A single validated adjacency: two polygons and the one boundary edge
/// they share. Endpoint coordinates agree by construction, because both
/// polygons reference the same entries of the vertex table.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AdjacencyEntry {
    pub a: PolygonId,
    pub b: PolygonId,
    pub shared_edge: Edge,
}

/// Validated mapping from polygon pairs to their shared boundary edge.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AdjacencyIndex {
    /// Entries in declaration order.
    entries: Vec<AdjacencyEntry>,
    neighbors: BTreeMap<PolygonId, BTreeSet<PolygonId>>,
    #[serde(skip)]
    shared_edges: BTreeMap<(PolygonId, PolygonId), Edge>,
}

impl AdjacencyIndex {
    /// Builds the index from the loaded polygons and the declared pairs.
    ///
    /// Per declared pair: both polygons must exist, the pair must not have
    /// been declared before (in either orientation), and the two boundary
    /// edge sets must intersect in exactly one edge. Zero shared edges is
    /// [`PolysetError::NoSharedEdge`]; more than one is
    /// [`PolysetError::AmbiguousAdjacency`] rather than silently picking one.
    pub fn build(
        polygons: &BTreeMap<PolygonId, PolygonRecord>,
        declared: &[DeclaredAdjacency],
    ) -> Result<Self, PolysetError> {
        let edge_sets: BTreeMap<PolygonId, BTreeSet<Edge>> = polygons
            .iter()
            .map(|(&id, record)| (id, record.edge_set()))
            .collect();

        let mut index = AdjacencyIndex::default();
        let mut seen: BTreeSet<(PolygonId, PolygonId)> = BTreeSet::new();

        for pair in declared {
            let key = normalized_pair(pair.a, pair.b);
            if !seen.insert(key) {
                return Err(PolysetError::DuplicateAdjacency {
                    a: pair.a,
                    b: pair.b,
                    line: pair.line,
                });
            }

            let edges_a = edge_sets
                .get(&pair.a)
                .ok_or(PolysetError::UnknownPolygon {
                    polygon: pair.a,
                    line: pair.line,
                })?;
            let edges_b = edge_sets
                .get(&pair.b)
                .ok_or(PolysetError::UnknownPolygon {
                    polygon: pair.b,
                    line: pair.line,
                })?;

            let mut shared = edges_a.intersection(edges_b);
            let shared_edge = match (shared.next(), shared.next()) {
                (None, _) => {
                    return Err(PolysetError::NoSharedEdge {
                        a: pair.a,
                        b: pair.b,
                        line: pair.line,
                    });
                }
                (Some(&edge), None) => edge,
                (Some(_), Some(_)) => {
                    let count = edges_a.intersection(edges_b).count();
                    return Err(PolysetError::AmbiguousAdjacency {
                        a: pair.a,
                        b: pair.b,
                        count,
                        line: pair.line,
                    });
                }
            };

            index.entries.push(AdjacencyEntry {
                a: pair.a,
                b: pair.b,
                shared_edge,
            });
            index.neighbors.entry(pair.a).or_default().insert(pair.b);
            index.neighbors.entry(pair.b).or_default().insert(pair.a);
            index.shared_edges.insert(key, shared_edge);
        }

        Ok(index)
    }

    /// The neighbors of a polygon, in ascending id order.
    ///
    /// Unknown or isolated polygons have no neighbors.
    pub fn neighbors_of(&self, id: PolygonId) -> BTreeSet<PolygonId> {
        self.neighbors.get(&id).cloned().unwrap_or_default()
    }

    /// The shared edge between two polygons, in either orientation.
    pub fn shared_edge_between(&self, a: PolygonId, b: PolygonId) -> Option<Edge> {
        self.shared_edges.get(&normalized_pair(a, b)).copied()
    }

    /// Validated entries in declaration order.
    pub fn entries(&self) -> &[AdjacencyEntry] {
        &self.entries
    }

    /// Number of validated adjacencies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no adjacencies were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalized_pair(a: PolygonId, b: PolygonId) -> (PolygonId, PolygonId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VertexId;

    fn record(id: u64, boundary: &[u64]) -> PolygonRecord {
        PolygonRecord::build(
            PolygonId::new(id),
            boundary.iter().copied().map(VertexId::new).collect(),
        )
        .unwrap()
    }

    fn polygons(records: Vec<PolygonRecord>) -> BTreeMap<PolygonId, PolygonRecord> {
        records.into_iter().map(|r| (r.id(), r)).collect()
    }

    fn declared(a: u64, b: u64, line: usize) -> DeclaredAdjacency {
        DeclaredAdjacency {
            a: PolygonId::new(a),
            b: PolygonId::new(b),
            line,
        }
    }

    /// Two squares sharing the edge (1, 2).
    fn two_squares() -> BTreeMap<PolygonId, PolygonRecord> {
        polygons(vec![
            record(1, &[0, 1, 2, 3]),
            record(2, &[1, 4, 5, 2]),
        ])
    }

    #[test]
    fn build_resolves_the_shared_edge() {
        let index = AdjacencyIndex::build(&two_squares(), &[declared(1, 2, 1)]).unwrap();

        assert_eq!(index.len(), 1);
        let entry = &index.entries()[0];
        assert_eq!(entry.shared_edge, Edge::new(VertexId(1), VertexId(2)));

        let neighbors: Vec<u64> = index
            .neighbors_of(PolygonId(1))
            .into_iter()
            .map(|p| p.as_u64())
            .collect();
        assert_eq!(neighbors, vec![2]);
    }

    #[test]
    fn shared_edge_lookup_ignores_orientation() {
        let index = AdjacencyIndex::build(&two_squares(), &[declared(1, 2, 1)]).unwrap();
        let forward = index.shared_edge_between(PolygonId(1), PolygonId(2));
        let reverse = index.shared_edge_between(PolygonId(2), PolygonId(1));
        assert_eq!(forward, reverse);
        assert_eq!(forward, Some(Edge::new(VertexId(1), VertexId(2))));
    }

    #[test]
    fn unknown_polygon_in_declaration_fails() {
        let err = AdjacencyIndex::build(&two_squares(), &[declared(1, 3, 1)]).unwrap_err();
        assert!(matches!(
            err,
            PolysetError::UnknownPolygon {
                polygon: PolygonId(3),
                line: 1,
            }
        ));
    }

    #[test]
    fn disjoint_polygons_declared_adjacent_fail() {
        let set = polygons(vec![
            record(1, &[0, 1, 2, 3]),
            record(2, &[10, 11, 12, 13]),
        ]);
        let err = AdjacencyIndex::build(&set, &[declared(1, 2, 1)]).unwrap_err();
        assert!(matches!(err, PolysetError::NoSharedEdge { .. }));
    }

    #[test]
    fn multiple_shared_edges_are_ambiguous() {
        // Polygon 2 wraps around two edges of polygon 1: (1,2) and (2,3).
        let set = polygons(vec![
            record(1, &[0, 1, 2, 3]),
            record(2, &[1, 4, 5, 3, 2]),
        ]);
        let err = AdjacencyIndex::build(&set, &[declared(1, 2, 1)]).unwrap_err();
        assert!(matches!(
            err,
            PolysetError::AmbiguousAdjacency { count: 2, .. }
        ));
    }

    #[test]
    fn duplicate_declaration_fails_in_either_orientation() {
        let err =
            AdjacencyIndex::build(&two_squares(), &[declared(1, 2, 1), declared(2, 1, 2)])
                .unwrap_err();
        assert!(matches!(
            err,
            PolysetError::DuplicateAdjacency { line: 2, .. }
        ));
    }

    #[test]
    fn validation_stops_at_the_first_bad_declaration() {
        let err =
            AdjacencyIndex::build(&two_squares(), &[declared(1, 9, 1), declared(9, 1, 2)]);
        assert!(matches!(
            err.unwrap_err(),
            PolysetError::UnknownPolygon { line: 1, .. }
        ));
    }

    #[test]
    fn isolated_polygons_have_no_neighbors() {
        let index = AdjacencyIndex::build(&two_squares(), &[]).unwrap();
        assert!(index.is_empty());
        assert!(index.neighbors_of(PolygonId(1)).is_empty());
        assert_eq!(index.shared_edge_between(PolygonId(1), PolygonId(2)), None);
    }
}
