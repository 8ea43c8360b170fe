use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::{Point, PolygonId, VertexId};

/// The pipeline stage a load error was raised in.
///
/// Loading runs `Scanning -> ParsingPolygons -> ParsingAdjacency ->
/// Validating`; every data defect maps to exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStage {
    /// Enumerating the source directory and classifying its files.
    Scanning,
    /// Parsing per-polygon vertex files and populating the vertex table.
    ParsingPolygons,
    /// Parsing the adjacency declaration file.
    ParsingAdjacency,
    /// Cross-checking declared adjacencies against boundary geometry.
    Validating,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadStage::Scanning => "scanning",
            LoadStage::ParsingPolygons => "parsing-polygons",
            LoadStage::ParsingAdjacency => "parsing-adjacency",
            LoadStage::Validating => "validating",
        };
        write!(f, "{}", name)
    }
}

/// The main error type for polyset operations.
///
/// Every parse or validation failure aborts the whole load; no partial
/// polygon set is ever returned. Each variant carries enough context
/// (file, line, polygon pair) to locate the offending input.
#[derive(Debug, Error)]
pub enum PolysetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("no adjacency.txt found in '{path}'")]
    MissingAdjacencyFile { path: PathBuf },

    #[error("no per-polygon .txt files found in '{path}'")]
    EmptyPolygonSet { path: PathBuf },

    #[error("file stem of '{path}' does not name a unique non-negative integer polygon id")]
    InvalidPolygonId { path: PathBuf },

    #[error("{path}:{line}: {message}")]
    MalformedVertexLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("polygon {polygon} is degenerate: {message}")]
    DegeneratePolygon {
        polygon: PolygonId,
        message: String,
    },

    #[error("vertex {vertex} redefined as {incoming}, already stored as {existing}")]
    VertexConflict {
        vertex: VertexId,
        existing: Point,
        incoming: Point,
    },

    #[error("unknown vertex {vertex}")]
    UnknownVertex { vertex: VertexId },

    #[error("{path}:{line}: {message}")]
    MalformedAdjacencyLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("adjacency line {line} references unknown polygon {polygon}")]
    UnknownPolygon { polygon: PolygonId, line: usize },

    #[error("polygons {a} and {b} declared adjacent (line {line}) but share no boundary edge")]
    NoSharedEdge {
        a: PolygonId,
        b: PolygonId,
        line: usize,
    },

    #[error(
        "polygons {a} and {b} share {count} boundary edges (line {line}); \
         pairwise adjacency must resolve to exactly one"
    )]
    AmbiguousAdjacency {
        a: PolygonId,
        b: PolygonId,
        count: usize,
        line: usize,
    },

    #[error("adjacency between {a} and {b} declared more than once (line {line})")]
    DuplicateAdjacency {
        a: PolygonId,
        b: PolygonId,
        line: usize,
    },

    #[error("Failed to write model JSON to {path}: {source}")]
    ModelJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PolysetError {
    /// The load stage this error belongs to, if it is a data defect raised
    /// by the load pipeline (`Io` and export errors carry no stage).
    pub fn stage(&self) -> Option<LoadStage> {
        match self {
            PolysetError::NotADirectory { .. }
            | PolysetError::MissingAdjacencyFile { .. }
            | PolysetError::EmptyPolygonSet { .. } => Some(LoadStage::Scanning),

            PolysetError::InvalidPolygonId { .. }
            | PolysetError::MalformedVertexLine { .. }
            | PolysetError::DegeneratePolygon { .. }
            | PolysetError::VertexConflict { .. }
            | PolysetError::UnknownVertex { .. } => Some(LoadStage::ParsingPolygons),

            PolysetError::MalformedAdjacencyLine { .. } => Some(LoadStage::ParsingAdjacency),

            PolysetError::UnknownPolygon { .. }
            | PolysetError::NoSharedEdge { .. }
            | PolysetError::AmbiguousAdjacency { .. }
            | PolysetError::DuplicateAdjacency { .. } => Some(LoadStage::Validating),

            PolysetError::Io(_) | PolysetError::ModelJsonWrite { .. } => None,
        }
    }
}
