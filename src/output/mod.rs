use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::PolygonWithHoles;

/// Serialize polygon groups as a JSON array.
///
/// Each entry is `{"hull": [point, ...], "holes": [[point, ...], ...]}` with
/// points written as `{"x": .., "y": .., "z": ..}`.
pub fn to_json_string(polygons: &[PolygonWithHoles], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(polygons)
    } else {
        serde_json::to_string(polygons)
    };
    json.context("Failed to serialize polygons")
}

/// Write polygon groups to `writer` followed by a newline
pub fn write_json<W: Write>(writer: W, polygons: &[PolygonWithHoles], pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writer.write_all(to_json_string(polygons, pretty)?.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn write_json_file(path: &Path, polygons: &[PolygonWithHoles], pretty: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json(file, polygons, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::outline::extract_polygons;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_shape() {
        let polygons = extract_polygons(&[Cell::new(0, 0)], 70).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&to_json_string(&polygons, false).unwrap()).unwrap();

        let groups = json.as_array().unwrap();
        assert_eq!(groups.len(), 1);
        let hull = groups[0]["hull"].as_array().unwrap();
        assert_eq!(hull.len(), 5);
        assert!(hull.iter().all(|p| p["y"] == 70));
        assert_eq!(hull[0], hull[4]);
        assert!(groups[0]["holes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(to_json_string(&[], false).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let polygons = extract_polygons(&[Cell::new(0, 0), Cell::new(5, 5)], 64).unwrap();

        write_json_file(&path, &polygons, true).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_write_json_to_buffer() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &[], false).unwrap();
        assert_eq!(buffer, b"[]\n");
    }
}
