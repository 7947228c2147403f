use pcd_core::pointcloud::point::{BoundingVolume, PointCloud};

use crate::colormap::ZColorMap;
use crate::options::ViewOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub origin: [f32; 3],
    pub end: [f32; 3],
    pub label: String,
}

/// Everything the window draws each frame, precomputed from the clouds.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub axes: Vec<Axis>,
    pub center: [f32; 3],
    /// Longest edge of the combined bounding volume, at least 1.
    pub extent: f32,
}

impl Scene {
    /// All clouds share one z colormap range.
    pub fn new(point_clouds: &[PointCloud], options: &ViewOptions) -> Self {
        let non_empty: Vec<&PointCloud> = point_clouds.iter().filter(|pc| !pc.is_empty()).collect();

        let bv = combined_bounding_volume(non_empty.iter().map(|pc| &pc.metadata.bounding_volume));
        let cmap = ZColorMap::from_bounding_volume(&bv);

        let vertices = non_empty
            .iter()
            .copied()
            .flat_map(|pc| pc.iter())
            .map(|(x, y, z, _)| Vertex {
                position: [x as f32, y as f32, z as f32],
                color: cmap.color(z),
            })
            .collect();

        let extent = bv.extent().max(1.0);
        let axes = (0..3)
            .map(|i| {
                let span = bv.max[i] - bv.min[i];
                let length = if span > 0.0 { span } else { extent };
                let origin = bv.min.map(|v| v as f32);
                let mut end = origin;
                end[i] += length as f32;
                Axis {
                    origin,
                    end,
                    label: options.axis_labels[i].clone(),
                }
            })
            .collect();

        Scene {
            vertices,
            axes,
            center: bv.center().map(|v| v as f32),
            extent: extent as f32,
        }
    }
}

fn combined_bounding_volume<'a>(
    volumes: impl Iterator<Item = &'a BoundingVolume>,
) -> BoundingVolume {
    volumes
        .fold(None, |acc: Option<BoundingVolume>, bv| {
            Some(match acc {
                None => bv.clone(),
                Some(mut c) => {
                    for i in 0..3 {
                        c.min[i] = c.min[i].min(bv.min[i]);
                        c.max[i] = c.max[i].max(bv.max[i]);
                    }
                    c
                }
            })
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pcd_core::pointcloud::point::Point;

    use super::*;
    use crate::colormap::jet;

    #[test]
    fn test_scene_colors_follow_z() {
        let pc = PointCloud::new(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 2.0),
            Point::new(2.0, 0.0, 4.0),
        ]);
        let scene = Scene::new(&[pc], &ViewOptions::default());

        assert_eq!(scene.vertices.len(), 3);
        assert_eq!(scene.vertices[0].color, jet(0.0));
        assert_eq!(scene.vertices[1].color, jet(0.5));
        assert_eq!(scene.vertices[2].color, jet(1.0));
        assert_eq!(scene.center, [1.0, 0.5, 2.0]);
        assert_eq!(scene.extent, 4.0);
    }

    #[test]
    fn test_axes_start_at_min_corner() {
        let pc = PointCloud::new(vec![Point::new(-1.0, 2.0, 3.0), Point::new(3.0, 2.0, 5.0)]);
        let scene = Scene::new(&[pc], &ViewOptions::default());

        let labels: Vec<&str> = scene.axes.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["X", "Y", "Z"]);
        assert_eq!(scene.axes[0].origin, [-1.0, 2.0, 3.0]);
        assert_eq!(scene.axes[0].end, [3.0, 2.0, 3.0]);
        // flat along y, so the axis falls back to the overall extent
        assert_eq!(scene.axes[1].end, [-1.0, 6.0, 3.0]);
        assert_eq!(scene.axes[2].end, [-1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_overlay_shares_color_range() {
        let low = PointCloud::new(vec![Point::new(0.0, 0.0, 0.0)]);
        let high = PointCloud::new(vec![Point::new(0.0, 0.0, 10.0)]);
        let scene = Scene::new(&[low, PointCloud::new(vec![]), high], &ViewOptions::default());

        assert_eq!(scene.vertices.len(), 2);
        assert_eq!(scene.vertices[0].color, jet(0.0));
        assert_eq!(scene.vertices[1].color, jet(1.0));
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(&[], &ViewOptions::default());

        assert!(scene.vertices.is_empty());
        assert_eq!(scene.extent, 1.0);
        assert_eq!(scene.center, [0.0, 0.0, 0.0]);
    }
}
