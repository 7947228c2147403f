pub mod map_points;
pub mod trajectory;

use std::path::Path;

use pcd_core::Result;

pub use map_points::PointCloudConverter;
pub use trajectory::TrajectoryConverter;

/// Reads one SLAM export and writes it as an ASCII PLY file.
pub trait Converter {
    /// Returns the number of vertices written. `output` is created or overwritten.
    fn convert(&self, input: &Path, output: &Path) -> Result<usize>;
}
