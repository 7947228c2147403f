use pcd_core::pointcloud::point::BoundingVolume;

/// Piecewise-linear "jet": dark blue at 0, through cyan, yellow, to dark red at 1.
/// `t` is clamped to `[0, 1]`.
pub fn jet(t: f64) -> [f32; 3] {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    let channel = |offset: f64| (1.5 - (4.0 * t - offset).abs()).clamp(0.0, 1.0) as f32;
    [channel(3.0), channel(2.0), channel(1.0)]
}

/// Maps a z value onto the jet colormap over a fixed `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZColorMap {
    pub min: f64,
    pub max: f64,
}

impl ZColorMap {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn from_bounding_volume(bv: &BoundingVolume) -> Self {
        Self::new(bv.min[2], bv.max[2])
    }

    pub fn color(&self, z: f64) -> [f32; 3] {
        let range = self.max - self.min;
        if range <= 0.0 {
            return jet(0.5);
        }
        jet((z - self.min) / range)
    }
}
