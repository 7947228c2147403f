pub mod parsers;

pub use parsers::{csv::CsvParser, kitti::KittiTrajectoryParser, Parser};
