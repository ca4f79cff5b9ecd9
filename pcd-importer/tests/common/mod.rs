use std::{
    fs::OpenOptions,
    io::{Seek, SeekFrom},
    path::Path,
};

use byteorder::{LittleEndian, ReadBytesExt as _, WriteBytesExt as _};
use las::{point::Classification, Builder, Writer};
use pcd_importer::ProgressReporter;
use tempfile::NamedTempFile;

const MAX_Z_OFFSET: u64 = 211;
const MIN_Z_OFFSET: u64 = 219;

pub const UNCLASSIFIED: u8 = 1;
pub const GROUND: u8 = 2;
pub const LOW_VEGETATION: u8 = 3;

pub fn write_las(points: &[([f64; 3], u8)]) -> NamedTempFile {
    let file = tempfile::Builder::new().suffix(".las").tempfile().unwrap();

    let mut builder = Builder::from((1, 2));
    builder.point_format = las::point::Format::new(0).unwrap();
    let header = builder.into_header().unwrap();
    let mut writer = Writer::from_path(file.path(), header).unwrap();

    for ([x, y, z], class) in points {
        let point = las::Point {
            x: *x,
            y: *y,
            z: *z,
            classification: Classification::new(*class).unwrap(),
            ..Default::default()
        };
        writer.write_point(point).unwrap();
    }
    writer.close().unwrap();

    file
}

/// Ten points inside `[0, 10]^3`, four of them ground.
pub fn scenario_a_points() -> Vec<([f64; 3], u8)> {
    vec![
        ([0.0, 0.0, 0.0], UNCLASSIFIED),
        ([1.0, 1.0, 1.0], GROUND),
        ([3.0, 7.0, 2.0], LOW_VEGETATION),
        ([9.0, 9.0, 9.0], GROUND),
        ([8.0, 1.0, 6.0], UNCLASSIFIED),
        ([5.0, 5.0, 5.0], GROUND),
        ([4.0, 4.0, 9.0], LOW_VEGETATION),
        ([2.0, 2.0, 2.0], GROUND),
        ([6.0, 2.0, 3.0], UNCLASSIFIED),
        ([10.0, 10.0, 10.0], UNCLASSIFIED),
    ]
}

/// Rewrites the header so that max z lies below min z.
pub fn invert_header_bounds(path: &Path) {
    let mut file = OpenOptions::new().read(true).write(true).open(path).unwrap();
    file.seek(SeekFrom::Start(MIN_Z_OFFSET)).unwrap();
    let min_z = file.read_f64::<LittleEndian>().unwrap();
    file.seek(SeekFrom::Start(MAX_Z_OFFSET)).unwrap();
    file.write_f64::<LittleEndian>(min_z - 1.0).unwrap();
}

#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub begun: Vec<u64>,
    pub updates: Vec<u64>,
    pub ended: usize,
}

impl ProgressReporter for RecordingProgress {
    fn begin(&mut self, total: u64) {
        self.begun.push(total);
    }

    fn update(&mut self, current: u64) {
        self.updates.push(current);
    }

    fn end(&mut self) {
        self.ended += 1;
    }
}
