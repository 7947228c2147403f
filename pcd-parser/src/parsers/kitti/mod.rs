use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use pcd_core::pointcloud::point::{Color, ColoredPoint, Point, PointCloud};
use pcd_core::{Error, Result};

use super::{parse_coordinate, Parser};

/// Image path followed by the 12 row-major entries of `[R | t]`.
pub const TOKENS_PER_POSE: usize = 13;

// Token indices of t_0, t_1, t_2 (the last column of each matrix row).
const TRANSLATION_INDICES: [usize; 3] = [4, 8, 12];

/// Camera trajectory in KITTI layout with the image path prepended:
///
/// ```text
/// /path/to/image0.png R_00 R_01 R_02 t_0 R_10 R_11 R_12 t_1 R_20 R_21 R_22 t_2
/// ```
///
/// Each pose becomes one vertex at its translation.
pub struct KittiTrajectoryParser {
    pub filename: PathBuf,
    pub color: Color,
}

impl KittiTrajectoryParser {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            color: Color::LIGHT_GREEN,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Parser for KittiTrajectoryParser {
    type Point = ColoredPoint;

    fn parse(&self) -> Result<PointCloud<ColoredPoint>> {
        let file = File::open(&self.filename)?;
        let point_cloud = parse_trajectory(BufReader::new(file), self.color)?;

        log::debug!(
            "parsed {} poses from {:?}",
            point_cloud.len(),
            self.filename
        );

        Ok(point_cloud)
    }
}

pub fn parse_trajectory<R: BufRead>(reader: R, color: Color) -> Result<PointCloud<ColoredPoint>> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let translation = parse_translation(&line, index + 1)?;
        points.push(ColoredPoint::new(translation, color));
    }

    Ok(PointCloud::new(points))
}

/// Extracts `(t_0, t_1, t_2)` from a single pose row.
pub fn parse_translation(line: &str, line_number: usize) -> Result<Point> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < TOKENS_PER_POSE {
        return Err(Error::parse(
            line_number,
            format!(
                "expected {} tokens (image path + 3x4 pose), found {}",
                TOKENS_PER_POSE,
                tokens.len()
            ),
        ));
    }

    let [ix, iy, iz] = TRANSLATION_INDICES;
    let x = parse_coordinate(tokens[ix], "tx", line_number)?;
    let y = parse_coordinate(tokens[iy], "ty", line_number)?;
    let z = parse_coordinate(tokens[iz], "tz", line_number)?;

    Ok(Point::new(x, y, z))
}
