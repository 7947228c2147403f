use std::path::Path;

use pcd_core::pointcloud::point::Color;
use pcd_core::Result;
use pcd_exporter::write_ply;
use pcd_parser::{KittiTrajectoryParser, Parser as _};

use crate::Converter;

/// Camera poses (image path + 3x4 `[R | t]`) to a colored PLY with one vertex
/// per pose translation.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryConverter {
    pub color: Color,
}

impl TrajectoryConverter {
    pub fn new() -> Self {
        Self {
            color: Color::LIGHT_GREEN,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for TrajectoryConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for TrajectoryConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<usize> {
        let start = std::time::Instant::now();

        let trajectory = KittiTrajectoryParser::new(input)
            .with_color(self.color)
            .parse()?;
        log::info!(
            "parsed {} poses in {:?}",
            trajectory.len(),
            start.elapsed()
        );

        write_ply(output, &trajectory)?;
        log::info!("wrote {:?}", output);

        Ok(trajectory.len())
    }
}
