use crate::{buffer::GeometryBuffer, error::GeometryError};

/// Assigns interleaved `x, y, z` values to the buffer's vertices in a single
/// pass: value `i` lands in component `i % 3` of vertex `i / 3`.
///
/// The buffer must hold exactly `coords.len() / 3` vertices. An empty array
/// against a single-vertex seed buffer is a no-op, whatever the seed position.
pub fn write_coordinates(buffer: &mut GeometryBuffer, coords: &[f64]) -> Result<(), GeometryError> {
    if coords.is_empty() && buffer.len() == 1 {
        return Ok(());
    }

    if coords.len() != buffer.len() * 3 {
        return Err(GeometryError::LengthMismatch {
            vertices: buffer.len(),
            coordinates: coords.len(),
        });
    }

    for (dst, src) in buffer.coordinates_mut().iter_mut().zip(coords) {
        *dst = *src as f32;
    }

    Ok(())
}
