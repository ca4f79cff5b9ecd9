pub mod las;

use std::path::Path;

use pcd_core::pointcloud::point::{Metadata, Point};

use crate::ParseError;

pub trait PointReader {
    fn metadata(&self) -> &Metadata;
    fn next_point(&mut self) -> Result<Option<Point>, ParseError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Las,
    Laz,
}

pub fn get_extension(path: &Path) -> Result<Extension, ParseError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("las") => Ok(Extension::Las),
        Some("laz") => Ok(Extension::Laz),
        _ => Err(ParseError::UnsupportedExtension(path.to_path_buf())),
    }
}

/// Opens the reader matching the file extension. The file handle lives as
/// long as the returned reader.
pub fn open_point_reader(path: &Path) -> Result<Box<dyn PointReader>, ParseError> {
    match get_extension(path)? {
        // the las crate decodes LAZ transparently
        Extension::Las | Extension::Laz => Ok(Box::new(self::las::LasPointReader::open(path)?)),
    }
}

pub struct PointIterator<R: PointReader> {
    reader: R,
    chunk_size: usize,
    failed: bool,
}

impl<R: PointReader> PointIterator<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(1),
            failed: false,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        self.reader.metadata()
    }
}

impl<R: PointReader> Iterator for PointIterator<R> {
    type Item = Result<Vec<Point>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut buffer = Vec::with_capacity(self.chunk_size);

        for _ in 0..self.chunk_size {
            match self.reader.next_point() {
                Ok(Some(p)) => buffer.push(p),
                Ok(None) => break,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        if buffer.is_empty() {
            None
        } else {
            Some(Ok(buffer))
        }
    }
}

impl<R: PointReader + ?Sized> PointReader for Box<R> {
    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }

    fn next_point(&mut self) -> Result<Option<Point>, ParseError> {
        (**self).next_point()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    struct VecReader {
        metadata: Metadata,
        points: std::vec::IntoIter<Point>,
    }

    impl PointReader for VecReader {
        fn metadata(&self) -> &Metadata {
            &self.metadata
        }

        fn next_point(&mut self) -> Result<Option<Point>, ParseError> {
            Ok(self.points.next())
        }
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(
            get_extension(&PathBuf::from("a/b/tile.LAS")).unwrap(),
            Extension::Las
        );
        assert_eq!(
            get_extension(&PathBuf::from("tile.laz")).unwrap(),
            Extension::Laz
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(matches!(
            get_extension(&PathBuf::from("points.csv")),
            Err(ParseError::UnsupportedExtension(_))
        ));
        assert!(get_extension(&PathBuf::from("points")).is_err());
    }

    #[test]
    fn iterator_yields_chunks_in_scan_order() {
        let points: Vec<Point> = (0..7).map(|i| Point::new(i as f64, 0.0, 0.0, 2)).collect();
        let reader = VecReader {
            metadata: Metadata::default(),
            points: points.clone().into_iter(),
        };
        let chunks: Vec<Vec<Point>> = PointIterator::new(reader, 3)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            chunks.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![3, 3, 1]
        );
        assert_eq!(chunks.concat(), points);
    }
}
