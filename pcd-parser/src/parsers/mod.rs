use pcd_core::pointcloud::point::PointCloud;
use pcd_core::Result;

pub mod csv;
pub mod kitti;

pub trait Parser {
    type Point;

    fn parse(&self) -> Result<PointCloud<Self::Point>>;
}

pub(crate) fn parse_coordinate(token: &str, name: &str, line: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| pcd_core::Error::parse(line, format!("Failed to parse '{name}': {e}")))
}
