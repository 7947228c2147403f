#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    pub title: String,
    pub axis_labels: [String; 3],
    pub point_size: f32,
    pub window_size: (u32, u32),
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            title: "3D Point Cloud".to_string(),
            axis_labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            point_size: 2.0,
            window_size: (800, 800),
        }
    }
}

impl ViewOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_axis_labels(mut self, x: &str, y: &str, z: &str) -> Self {
        self.axis_labels = [x.to_string(), y.to_string(), z.to_string()];
        self
    }

    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }
}
