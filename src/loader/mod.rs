//! Directory loader for polygon sets.
//!
//! A set lives in one flat directory: N per-polygon files named
//! `<polygonId>.txt` (one `vertexId x y` record per line, in boundary order)
//! plus exactly one `adjacency.txt` (one `polygonIdA polygonIdB` declaration
//! per line). Loading runs a fixed pipeline — scan the directory, parse the
//! polygon files, parse the adjacency file, validate declarations against
//! boundary geometry — and is all-or-nothing: every failure discards all
//! partial state, and the set is only published whole at the end.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::PolysetError;
use crate::model::{
    AdjacencyIndex, DeclaredAdjacency, Point, PolygonId, PolygonRecord, PolygonSet, VertexId,
    VertexTable,
};

const SET_EXTENSION: &str = "txt";
const ADJACENCY_STEM: &str = "adjacency";

/// Options for a load operation.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Integer factor applied to every coordinate while reading.
    pub scale: i64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

/// Loads, validates, and assembles the polygon set in `path`.
///
/// This is the sole entry point consumers call. It returns either a complete
/// [`PolygonSet`] or the first [`PolysetError`] encountered; no partial set
/// ever escapes.
pub fn load(path: &Path, options: &LoadOptions) -> Result<PolygonSet, PolysetError> {
    let layout = scan_directory(path)?;
    let (vertices, polygons) = parse_polygons(&layout, options)?;
    let declared = parse_adjacency_file(&layout.adjacency_file)?;
    let adjacency = AdjacencyIndex::build(&polygons, &declared)?;
    Ok(PolygonSet::new(vertices, polygons, adjacency))
}

#[derive(Clone, Debug)]
struct SetLayout {
    polygon_files: Vec<PathBuf>,
    adjacency_file: PathBuf,
}

fn scan_directory(path: &Path) -> Result<SetLayout, PolysetError> {
    if !path.is_dir() {
        return Err(PolysetError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mut polygon_files = Vec::new();
    let mut adjacency_file = None;

    // The layout is flat; subdirectories are not part of a set.
    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() || !has_set_extension(entry.path()) {
            continue;
        }
        if stem_is_reserved(entry.path()) {
            adjacency_file = Some(entry.path().to_path_buf());
        } else {
            polygon_files.push(entry.path().to_path_buf());
        }
    }

    let adjacency_file = adjacency_file.ok_or_else(|| PolysetError::MissingAdjacencyFile {
        path: path.to_path_buf(),
    })?;
    if polygon_files.is_empty() {
        return Err(PolysetError::EmptyPolygonSet {
            path: path.to_path_buf(),
        });
    }

    // File-name order, so parse failures surface deterministically.
    polygon_files.sort();

    Ok(SetLayout {
        polygon_files,
        adjacency_file,
    })
}

fn parse_polygons(
    layout: &SetLayout,
    options: &LoadOptions,
) -> Result<(VertexTable, BTreeMap<PolygonId, PolygonRecord>), PolysetError> {
    let mut vertices = VertexTable::new();
    let mut polygons: BTreeMap<PolygonId, PolygonRecord> = BTreeMap::new();

    for file in &layout.polygon_files {
        let id = polygon_id_from_stem(file)?;
        let content = fs::read_to_string(file).map_err(PolysetError::Io)?;

        let mut boundary = Vec::new();
        for (line_idx, line) in content.lines().enumerate() {
            let line_num = line_idx + 1;
            let Some((vertex_id, point)) = parse_vertex_line(line, file, line_num)? else {
                continue;
            };
            let point = point.checked_scaled(options.scale).ok_or_else(|| {
                PolysetError::MalformedVertexLine {
                    path: file.clone(),
                    line: line_num,
                    message: format!(
                        "coordinate {} overflows i64 when scaled by {}",
                        point, options.scale
                    ),
                }
            })?;
            vertices.insert(vertex_id, point)?;
            boundary.push(vertex_id);
        }

        let record = PolygonRecord::build(id, boundary)?;
        if polygons.insert(id, record).is_some() {
            // Two stems parsed to the same id (e.g. "3.txt" and "03.txt").
            return Err(PolysetError::InvalidPolygonId {
                path: file.clone(),
            });
        }
    }

    Ok((vertices, polygons))
}

fn polygon_id_from_stem(path: &Path) -> Result<PolygonId, PolysetError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.parse::<u64>().ok())
        .map(PolygonId::new)
        .ok_or_else(|| PolysetError::InvalidPolygonId {
            path: path.to_path_buf(),
        })
}

/// Parses one `vertexId x y` record. Blank lines yield `None`.
fn parse_vertex_line(
    line: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<Option<(VertexId, Point)>, PolysetError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // Take at most 4 tokens so pathological inputs do not allocate unbounded memory.
    let tokens: Vec<&str> = trimmed.split_whitespace().take(4).collect();
    if tokens.len() < 3 {
        return Err(PolysetError::MalformedVertexLine {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("expected 3 tokens (vertexId x y), found {}", tokens.len()),
        });
    }
    if tokens.len() > 3 {
        return Err(PolysetError::MalformedVertexLine {
            path: file_path.to_path_buf(),
            line: line_num,
            message: "expected 3 tokens (vertexId x y), found trailing data".to_string(),
        });
    }

    let vertex_id = tokens[0]
        .parse::<u64>()
        .map(VertexId::new)
        .map_err(|_| PolysetError::MalformedVertexLine {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!(
                "invalid vertex id '{}'; expected non-negative integer",
                tokens[0]
            ),
        })?;
    let x = parse_i64_token(tokens[1], "x", file_path, line_num)?;
    let y = parse_i64_token(tokens[2], "y", file_path, line_num)?;

    Ok(Some((vertex_id, Point::new(x, y))))
}

fn parse_adjacency_file(path: &Path) -> Result<Vec<DeclaredAdjacency>, PolysetError> {
    let content = fs::read_to_string(path).map_err(PolysetError::Io)?;
    let mut declared = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line_num = line_idx + 1;
        if let Some(pair) = parse_adjacency_line(line, path, line_num)? {
            declared.push(pair);
        }
    }

    Ok(declared)
}

/// Parses one `polygonIdA polygonIdB` declaration. Blank lines yield `None`.
fn parse_adjacency_line(
    line: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<Option<DeclaredAdjacency>, PolysetError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().take(3).collect();
    if tokens.len() < 2 {
        return Err(PolysetError::MalformedAdjacencyLine {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!(
                "expected 2 tokens (polygonIdA polygonIdB), found {}",
                tokens.len()
            ),
        });
    }
    if tokens.len() > 2 {
        return Err(PolysetError::MalformedAdjacencyLine {
            path: file_path.to_path_buf(),
            line: line_num,
            message: "expected 2 tokens (polygonIdA polygonIdB), found trailing data".to_string(),
        });
    }

    let a = parse_polygon_id_token(tokens[0], file_path, line_num)?;
    let b = parse_polygon_id_token(tokens[1], file_path, line_num)?;

    Ok(Some(DeclaredAdjacency {
        a,
        b,
        line: line_num,
    }))
}

fn parse_i64_token(
    raw: &str,
    field_name: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<i64, PolysetError> {
    raw.parse::<i64>()
        .map_err(|_| PolysetError::MalformedVertexLine {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("invalid {field_name} '{raw}'; expected integer"),
        })
}

fn parse_polygon_id_token(
    raw: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<PolygonId, PolysetError> {
    raw.parse::<u64>()
        .map(PolygonId::new)
        .map_err(|_| PolysetError::MalformedAdjacencyLine {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("invalid polygon id '{raw}'; expected non-negative integer"),
        })
}

fn has_set_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SET_EXTENSION))
        .unwrap_or(false)
}

// Case-insensitive, like the extension match: ADJACENCY.TXT is the
// adjacency file, not a polygon file with an unparseable stem.
fn stem_is_reserved(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.eq_ignore_ascii_case(ADJACENCY_STEM))
        .unwrap_or(false)
}

/// Fuzz-only entrypoint for vertex-line parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_vertex_line(input: &str) -> Result<(), PolysetError> {
    let _ = parse_vertex_line(input, Path::new("<fuzz>"), 1)?;
    Ok(())
}

/// Fuzz-only entrypoint for adjacency-line parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_adjacency_line(input: &str) -> Result<(), PolysetError> {
    let _ = parse_adjacency_line(input, Path::new("<fuzz>"), 1)?;
    Ok(())
}
