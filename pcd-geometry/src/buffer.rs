use std::ops::Range;

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub co: [f32; 3],
}

/// Vertex storage handed to the host scene.
///
/// A fresh buffer holds a single seed vertex at the origin. The doubling
/// builder grows it by duplicating index sets; the coordinate writer then
/// overwrites every vertex position in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBuffer {
    vertices: Vec<Vertex>,
}

impl Default for GeometryBuffer {
    fn default() -> Self {
        Self::seed()
    }
}

impl GeometryBuffer {
    pub fn seed() -> Self {
        Self {
            vertices: vec![Vertex::default()],
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True for the untouched one-vertex state, which stands for "no data".
    pub fn is_seed(&self) -> bool {
        self.vertices.len() == 1 && self.vertices[0] == Vertex::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` slice.
    pub fn coordinates(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn coordinates_mut(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(&mut self.vertices)
    }

    /// Appends a copy of every vertex in `selection` and returns the index
    /// range occupied by the copies.
    pub(crate) fn duplicate(&mut self, selection: &[usize]) -> Range<usize> {
        let start = self.vertices.len();
        self.vertices.reserve(selection.len());
        for &index in selection {
            let vertex = self.vertices[index];
            self.vertices.push(vertex);
        }
        start..self.vertices.len()
    }

    /// Appends copies of `selection` taken from another buffer.
    pub(crate) fn extend_from(&mut self, source: &GeometryBuffer, selection: &[usize]) {
        self.vertices
            .extend(selection.iter().map(|&index| source.vertices[index]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_single_vertex_at_origin() {
        let buffer = GeometryBuffer::seed();
        assert_eq!(buffer.len(), 1);
        assert!(buffer.is_seed());
        assert_eq!(buffer.coordinates(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn duplicate_appends_selected_vertices() {
        let mut buffer = GeometryBuffer::seed();
        buffer.vertices_mut()[0].co = [1.0, 2.0, 3.0];
        let first = buffer.duplicate(&[0]);
        assert_eq!(first, 1..2);
        let second = buffer.duplicate(&[0, 1]);
        assert_eq!(second, 2..4);
        assert_eq!(buffer.len(), 4);
        assert!(buffer.vertices().iter().all(|v| v.co == [1.0, 2.0, 3.0]));
        assert!(!buffer.is_seed());
    }

    #[test]
    fn coordinates_view_is_interleaved() {
        let mut buffer = GeometryBuffer::seed();
        buffer.duplicate(&[0]);
        buffer.coordinates_mut()[3..6].copy_from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(buffer.vertices()[1].co, [4.0, 5.0, 6.0]);
        assert_eq!(buffer.coordinates().len(), 6);
    }
}
