use std::{fs::File, io::Read, path::PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use pcd_core::pointcloud::point::{Point, PointCloud};
use pcd_core::{Error, Result};

use super::{parse_coordinate, Parser};

/// Map points exported by the SLAM system: one header line, then rows of
/// `x, y, z[, ...]` in the world frame.
pub struct CsvParser {
    pub filename: PathBuf,
}

impl CsvParser {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

impl Parser for CsvParser {
    type Point = Point;

    fn parse(&self) -> Result<PointCloud> {
        let file = File::open(&self.filename)?;
        let point_cloud = parse_map_points(file)?;

        log::debug!(
            "parsed {} map points from {:?}",
            point_cloud.len(),
            self.filename
        );

        Ok(point_cloud)
    }
}

pub fn parse_map_points<R: Read>(rdr: R) -> Result<PointCloud> {
    // The first row is consumed as the header. Fields are trimmed so that
    // both ", " and "," separate columns.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let mut points = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record).map_err(from_csv_error)? {
        // whitespace-only lines come back as a single empty field after trimming
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(points.len() + 2);
        points.push(parse_point(&record, line)?);
    }

    Ok(PointCloud::new(points))
}

fn parse_point(record: &StringRecord, line: usize) -> Result<Point> {
    if record.len() < 3 {
        return Err(Error::parse(
            line,
            format!("expected at least 3 fields (x, y, z), found {}", record.len()),
        ));
    }

    let x = parse_coordinate(&record[0], "x", line)?;
    let y = parse_coordinate(&record[1], "y", line)?;
    let z = parse_coordinate(&record[2], "z", line)?;

    Ok(Point::new(x, y, z))
}

/// Errors the csv crate reports without a position get line 0.
fn from_csv_error(err: csv::Error) -> Error {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => Error::Io(e),
        _ => Error::parse(line, message),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_parse_map_points() {
        let data = "pos_x, pos_y, pos_z\n1.5, -2.0, 3.25\n0, 0, 0\n";
        let pc = parse_map_points(data.as_bytes()).unwrap();

        assert_eq!(pc.len(), 2);
        assert_eq!(pc.points[0], Point::new(1.5, -2.0, 3.25));
        assert_eq!(pc.points[1], Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "x, y, z, observations, id\n1, 2, 3, 17, 4\n";
        let pc = parse_map_points(data.as_bytes()).unwrap();

        assert_eq!(pc.points, vec![Point::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_header_only() {
        let pc = parse_map_points("x, y, z\n".as_bytes()).unwrap();
        assert!(pc.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let data = "x, y, z\n1, 2, 3\n\n4, 5, 6\n";
        let pc = parse_map_points(data.as_bytes()).unwrap();
        assert_eq!(pc.len(), 2);
    }

    #[test]
    fn test_whitespace_only_lines_are_skipped() {
        let data = "x, y, z\n1, 2, 3\n   \n4, 5, 6\n \t \n";
        let pc = parse_map_points(data.as_bytes()).unwrap();

        assert_eq!(
            pc.points,
            vec![Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)]
        );
    }

    #[test]
    fn test_invalid_utf8_reports_line_and_readable_message() {
        let data: &[u8] = b"x, y, z\n1, \xff, 3\n";
        let err = parse_map_points(data).unwrap_err();

        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(!message.contains("Utf8 {"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_two_fields_is_parse_error() {
        let data = "x, y, z\n1, 2, 3\n4, 5\n";
        let err = parse_map_points(data.as_bytes()).unwrap_err();

        match err {
            Error::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() {
        let data = "x, y, z\n1, abc, 3\n";
        let err = parse_map_points(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("'y'"));
    }

    #[test]
    fn test_parser_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pos_x, pos_y, pos_z").unwrap();
        writeln!(file, "0.1, 0.2, 0.3").unwrap();

        let pc = CsvParser::new(file.path()).parse().unwrap();
        assert_eq!(pc.points, vec![Point::new(0.1, 0.2, 0.3)]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvParser::new(dir.path().join("missing.txt"))
            .parse()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
