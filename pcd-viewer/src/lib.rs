pub mod colormap;
pub mod options;
pub mod reader;
pub mod scene;
#[cfg(feature = "window")]
pub mod window;

#[cfg(feature = "window")]
use std::path::Path;

#[cfg(feature = "window")]
use pcd_core::Result;

pub use options::ViewOptions;
pub use reader::read_ply_vertices;
pub use scene::Scene;

/// Renders ASCII PLY files as a 3D scatter plot colored by height.
#[derive(Debug, Clone, Default)]
pub struct PlyViewer {
    pub options: ViewOptions,
}

impl PlyViewer {
    pub fn new(options: ViewOptions) -> Self {
        Self { options }
    }
}

#[cfg(feature = "window")]
impl PlyViewer {
    /// Loads `ply_path` and blocks until the window is closed.
    pub fn load_and_render(&self, ply_path: impl AsRef<Path>) -> Result<()> {
        self.load_and_render_all(&[ply_path])
    }

    /// Overlays several files in one window, e.g. a map and its trajectory.
    pub fn load_and_render_all<P: AsRef<Path>>(&self, ply_paths: &[P]) -> Result<()> {
        let point_clouds = ply_paths
            .iter()
            .map(read_ply_vertices)
            .collect::<Result<Vec<_>>>()?;

        let scene = Scene::new(&point_clouds, &self.options);
        window::show(&scene, &self.options);

        Ok(())
    }
}
