use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use pcd_core::pointcloud::point::{ColoredPoint, Point, PointCloud};
use pcd_core::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Float,
    Uchar,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Float => "float",
            PropertyType::Uchar => "uchar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyProperty {
    pub name: &'static str,
    pub property_type: PropertyType,
}

const fn property(name: &'static str, property_type: PropertyType) -> PlyProperty {
    PlyProperty {
        name,
        property_type,
    }
}

const XYZ: [PlyProperty; 3] = [
    property("x", PropertyType::Float),
    property("y", PropertyType::Float),
    property("z", PropertyType::Float),
];

const XYZ_RGB: [PlyProperty; 6] = [
    property("x", PropertyType::Float),
    property("y", PropertyType::Float),
    property("z", PropertyType::Float),
    property("red", PropertyType::Uchar),
    property("green", PropertyType::Uchar),
    property("blue", PropertyType::Uchar),
];

/// A point type that can be stored as one line of an ASCII PLY vertex element.
///
/// `write_fields` must emit exactly one value per entry of `PROPERTIES`, in the
/// same order, separated by single spaces and without a trailing newline.
pub trait PlyVertex {
    const PROPERTIES: &'static [PlyProperty];

    fn write_fields<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

// Coordinates use six fixed decimals, like printf's "%f".
impl PlyVertex for Point {
    const PROPERTIES: &'static [PlyProperty] = &XYZ;

    fn write_fields<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{:.6} {:.6} {:.6}", self.x, self.y, self.z)
    }
}

impl PlyVertex for ColoredPoint {
    const PROPERTIES: &'static [PlyProperty] = &XYZ_RGB;

    fn write_fields<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.point.write_fields(writer)?;
        write!(
            writer,
            " {} {} {}",
            self.color.r, self.color.g, self.color.b
        )
    }
}

pub fn write_header<W: Write>(
    writer: &mut W,
    vertex_count: usize,
    properties: &[PlyProperty],
) -> io::Result<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", vertex_count)?;
    for p in properties {
        writeln!(writer, "property {} {}", p.property_type.as_str(), p.name)?;
    }
    writeln!(writer, "end_header")
}

/// Serializes the cloud as ASCII PLY. The declared vertex count is the number
/// of points, so header and body always agree.
pub fn write_ply_to<W: Write, P: PlyVertex>(
    mut writer: W,
    point_cloud: &PointCloud<P>,
) -> io::Result<()> {
    write_header(&mut writer, point_cloud.points.len(), P::PROPERTIES)?;

    for point in &point_cloud.points {
        point.write_fields(&mut writer)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}

/// Creates (or truncates) `path` and writes the cloud to it.
pub fn write_ply<P: PlyVertex>(path: impl AsRef<Path>, point_cloud: &PointCloud<P>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ply_to(BufWriter::new(file), point_cloud)?;

    log::debug!(
        "wrote {} vertices ({} properties) to {:?}",
        point_cloud.points.len(),
        P::PROPERTIES.len(),
        path
    );

    Ok(())
}
