use std::{
    fs::OpenOptions,
    io::{Seek, SeekFrom},
    path::Path,
};

use byteorder::{LittleEndian, ReadBytesExt as _, WriteBytesExt as _};
use las::{point::Classification, Builder, Writer};
use pcd_core::pointcloud::point::Point;
use tempfile::NamedTempFile;

// Byte offsets of Max X / Min X in a LAS 1.2 public header block.
const MAX_X_OFFSET: u64 = 179;
const MIN_X_OFFSET: u64 = 187;

pub fn write_las(points: &[Point]) -> NamedTempFile {
    let file = tempfile::Builder::new().suffix(".las").tempfile().unwrap();

    let mut builder = Builder::from((1, 2));
    builder.point_format = las::point::Format::new(0).unwrap();
    let header = builder.into_header().unwrap();
    let mut writer = Writer::from_path(file.path(), header).unwrap();

    for p in points {
        let las_point = las::Point {
            x: p.x,
            y: p.y,
            z: p.z,
            classification: Classification::new(p.classification).unwrap(),
            ..Default::default()
        };
        writer.write_point(las_point).unwrap();
    }
    writer.close().unwrap();

    file
}

/// Rewrites the header so that max x lies below min x.
pub fn invert_header_bounds(path: &Path) {
    let mut file = OpenOptions::new().read(true).write(true).open(path).unwrap();
    file.seek(SeekFrom::Start(MIN_X_OFFSET)).unwrap();
    let min_x = file.read_f64::<LittleEndian>().unwrap();
    file.seek(SeekFrom::Start(MAX_X_OFFSET)).unwrap();
    file.write_f64::<LittleEndian>(min_x - 5.0).unwrap();
}
