use std::path::PathBuf;

use pcd_parser::{CsvParser, Parser as _};

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("PointCloud.txt"));

    let parser = CsvParser::new(path);
    let point_cloud = parser.parse();

    println!(
        "Number of points: {num_points}",
        num_points = point_cloud.as_ref().unwrap().points.len()
    );

    println!("First point: {:?}", point_cloud.as_ref().unwrap().points.first());
    println!(
        "Bounding volume: {:?}",
        point_cloud.as_ref().unwrap().metadata.bounding_volume
    );
}
