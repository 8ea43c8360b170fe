//! Summary reporting for loaded polygon sets.
//!
//! A successful load prints (or serializes) a small structured report:
//! overall counts plus one line per polygon with its boundary size,
//! neighbor count, and perimeter.

use serde::Serialize;
use std::fmt;

use crate::error::PolysetError;
use crate::model::PolygonSet;

/// Structured summary of a loaded polygon set.
#[derive(Clone, Debug, Serialize)]
pub struct LoadReport {
    pub summary: SummarySection,
    pub polygons: Vec<PolygonLine>,
}

/// Overall counts for the set.
#[derive(Clone, Debug, Serialize)]
pub struct SummarySection {
    pub polygons: usize,
    pub vertices: usize,
    pub adjacencies: usize,
    /// Polygons with no declared neighbor.
    pub isolated_polygons: usize,
}

/// Per-polygon summary line.
#[derive(Clone, Debug, Serialize)]
pub struct PolygonLine {
    pub id: u64,
    pub vertex_count: usize,
    pub neighbor_count: usize,
    pub perimeter: f64,
}

/// Summarizes a loaded set.
///
/// Polygon lines come out in ascending id order, matching the set's own
/// iteration order.
pub fn summarize(set: &PolygonSet) -> Result<LoadReport, PolysetError> {
    let mut polygons = Vec::with_capacity(set.polygon_count());
    let mut isolated = 0;

    for (&id, record) in set.polygons() {
        let neighbor_count = set.adjacency().neighbors_of(id).len();
        if neighbor_count == 0 {
            isolated += 1;
        }
        polygons.push(PolygonLine {
            id: id.as_u64(),
            vertex_count: record.vertex_count(),
            neighbor_count,
            perimeter: record.perimeter(set.vertices())?,
        });
    }

    Ok(LoadReport {
        summary: SummarySection {
            polygons: set.polygon_count(),
            vertices: set.vertex_count(),
            adjacencies: set.adjacency().len(),
            isolated_polygons: isolated,
        },
        polygons,
    })
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Loaded {} polygon(s), {} vertex(es), {} adjacency(ies)",
            self.summary.polygons, self.summary.vertices, self.summary.adjacencies
        )?;
        if self.summary.isolated_polygons > 0 {
            writeln!(
                f,
                "  {} polygon(s) without neighbors",
                self.summary.isolated_polygons
            )?;
        }
        writeln!(f)?;
        for line in &self.polygons {
            writeln!(
                f,
                "  polygon {:>4}: {:>3} vertices, {} neighbor(s), perimeter {:.2}",
                line.id, line.vertex_count, line.neighbor_count, line.perimeter
            )?;
        }
        Ok(())
    }
}
