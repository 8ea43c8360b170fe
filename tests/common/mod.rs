#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Writes `<id>.txt` with one `vertexId x y` record per line.
pub fn write_polygon_file(dir: &Path, id: u64, vertices: &[(u64, i64, i64)]) {
    let mut content = String::new();
    for (vid, x, y) in vertices {
        content.push_str(&format!("{} {} {}\n", vid, x, y));
    }
    fs::write(dir.join(format!("{}.txt", id)), content).expect("write polygon file");
}

/// Writes `adjacency.txt` with one `polygonIdA polygonIdB` pair per line.
pub fn write_adjacency_file(dir: &Path, pairs: &[(u64, u64)]) {
    let mut content = String::new();
    for (a, b) in pairs {
        content.push_str(&format!("{} {}\n", a, b));
    }
    fs::write(dir.join("adjacency.txt"), content).expect("write adjacency file");
}

/// Two axis-aligned squares sharing the vertical edge between vertices 1 and 2.
pub fn write_two_squares(dir: &Path) {
    write_polygon_file(
        dir,
        1,
        &[(0, 0, 0), (1, 10, 0), (2, 10, 10), (3, 0, 10)],
    );
    write_polygon_file(
        dir,
        2,
        &[(1, 10, 0), (4, 20, 0), (5, 20, 10), (2, 10, 10)],
    );
    write_adjacency_file(dir, &[(1, 2)]);
}
