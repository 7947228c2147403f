#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// (144, 238, 144), used for trajectory vertices.
    pub const LIGHT_GREEN: Color = Color {
        r: 144,
        g: 238,
        b: 144,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    pub point: Point,
    pub color: Color,
}

impl ColoredPoint {
    pub fn new(point: Point, color: Color) -> Self {
        Self { point, color }
    }
}

/// Anything with a position in the world frame.
pub trait Position {
    fn position(&self) -> Point;
}

impl Position for Point {
    fn position(&self) -> Point {
        *self
    }
}

impl Position for ColoredPoint {
    fn position(&self) -> Point {
        self.point
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud<P = Point> {
    pub points: Vec<P>,
    pub metadata: Metadata,
}

impl<P: Position> PointCloud<P> {
    pub fn new(points: Vec<P>) -> Self {
        let mut bounding_volume = BoundingVolume {
            min: [f64::MAX, f64::MAX, f64::MAX],
            max: [f64::MIN, f64::MIN, f64::MIN],
        };

        let mut point_count = 0;

        for point in &points {
            let p = point.position();
            bounding_volume.max[0] = bounding_volume.max[0].max(p.x);
            bounding_volume.max[1] = bounding_volume.max[1].max(p.y);
            bounding_volume.max[2] = bounding_volume.max[2].max(p.z);
            bounding_volume.min[0] = bounding_volume.min[0].min(p.x);
            bounding_volume.min[1] = bounding_volume.min[1].min(p.y);
            bounding_volume.min[2] = bounding_volume.min[2].min(p.z);

            point_count += 1;
        }

        if point_count == 0 {
            bounding_volume = BoundingVolume::default();
        }

        let metadata = Metadata {
            point_count,
            bounding_volume,
        };

        PointCloud { points, metadata }
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64, &P)> {
        self.points.iter().map(|point| {
            let p = point.position();
            (p.x, p.y, p.z, point)
        })
    }
}

impl<P> PointCloud<P> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// Axis-aligned extent of the cloud. All zeros for an empty cloud.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundingVolume {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingVolume {
    pub fn center(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// Length of the longest edge.
    pub fn extent(&self) -> f64 {
        (0..3)
            .map(|i| self.max[i] - self.min[i])
            .fold(0.0_f64, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    pub point_count: usize,
    pub bounding_volume: BoundingVolume,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_volume() {
        let pc = PointCloud::new(vec![
            Point::new(1.0, -2.0, 3.0),
            Point::new(-1.0, 4.0, 0.5),
            Point::new(0.0, 0.0, 10.0),
        ]);

        assert_eq!(pc.metadata.point_count, 3);
        assert_eq!(pc.metadata.bounding_volume.min, [-1.0, -2.0, 0.5]);
        assert_eq!(pc.metadata.bounding_volume.max, [1.0, 4.0, 10.0]);
        assert_eq!(pc.metadata.bounding_volume.center(), [0.0, 1.0, 5.25]);
        assert_eq!(pc.metadata.bounding_volume.extent(), 9.5);
    }

    #[test]
    fn test_empty_cloud() {
        let pc: PointCloud = PointCloud::new(vec![]);

        assert!(pc.is_empty());
        assert_eq!(pc.metadata.point_count, 0);
        assert_eq!(pc.metadata.bounding_volume, BoundingVolume::default());
    }

    #[test]
    fn test_colored_points_keep_insertion_order() {
        let points = vec![
            ColoredPoint::new(Point::new(3.0, 0.0, 0.0), Color::LIGHT_GREEN),
            ColoredPoint::new(Point::new(1.0, 0.0, 0.0), Color::LIGHT_GREEN),
            ColoredPoint::new(Point::new(3.0, 0.0, 0.0), Color::LIGHT_GREEN),
        ];
        let pc = PointCloud::new(points);

        let xs: Vec<f64> = pc.iter().map(|(x, _, _, _)| x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 3.0]);
        assert_eq!(pc.points[0].color.to_rgb8(), [144, 238, 144]);
    }
}
