use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use pcd_core::pointcloud::point::{Point, PointCloud};
use pcd_core::{Error, Result};

const END_HEADER: &str = "end_header";

/// Reads the vertex positions of an ASCII PLY file.
///
/// The header is skipped up to the first line that is exactly `end_header`
/// (surrounding whitespace ignored). Every following non-blank line is a row
/// of numbers; all rows must have the same number of columns and the first
/// three are taken as x, y, z. Any further columns (colors, normals) are
/// ignored.
pub fn read_ply_vertices(path: impl AsRef<Path>) -> Result<PointCloud> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let point_cloud = parse_ply_vertices(BufReader::new(file))?;

    log::debug!("read {} vertices from {:?}", point_cloud.len(), path);

    Ok(point_cloud)
}

pub fn parse_ply_vertices<R: BufRead>(reader: R) -> Result<PointCloud> {
    let mut lines = reader.lines().enumerate();

    let mut found_end_header = false;
    for (_, line) in lines.by_ref() {
        if line?.trim() == END_HEADER {
            found_end_header = true;
            break;
        }
    }
    if !found_end_header {
        return Err(Error::Format(format!("missing '{END_HEADER}' line")));
    }

    let mut columns: Option<usize> = None;
    let mut points = Vec::new();
    let mut row = Vec::new();

    for (index, line) in lines {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        row.clear();
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|e| {
                Error::parse(line_number, format!("invalid number '{token}': {e}"))
            })?;
            row.push(value);
        }

        match columns {
            None if row.len() < 3 => {
                return Err(Error::parse(
                    line_number,
                    format!("expected at least 3 columns, found {}", row.len()),
                ));
            }
            None => columns = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(Error::parse(
                    line_number,
                    format!("expected {} columns, found {}", n, row.len()),
                ));
            }
            Some(_) => {}
        }

        points.push(Point::new(row[0], row[1], row[2]));
    }

    Ok(PointCloud::new(points))
}
