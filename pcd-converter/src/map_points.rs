use std::path::Path;

use pcd_core::Result;
use pcd_exporter::write_ply;
use pcd_parser::{CsvParser, Parser as _};

use crate::Converter;

/// Map points (`x, y, z` rows after one header line) to a vertex-only PLY.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointCloudConverter;

impl Converter for PointCloudConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<usize> {
        let start = std::time::Instant::now();

        let point_cloud = CsvParser::new(input).parse()?;
        log::info!(
            "parsed {} map points in {:?}",
            point_cloud.len(),
            start.elapsed()
        );

        let bv = &point_cloud.metadata.bounding_volume;
        log::debug!("bounding volume: min {:?}, max {:?}", bv.min, bv.max);

        write_ply(output, &point_cloud)?;
        log::info!("wrote {:?}", output);

        Ok(point_cloud.len())
    }
}
