use std::io::Write;

use byteorder::{ByteOrder as _, LittleEndian};

use crate::buffer::GeometryBuffer;

const BYTE_STRIDE: usize = 4 * 3;

/// Writes the buffer as a binary little-endian PLY point set.
pub fn write_ply<W: Write>(writer: &mut W, geometry: &GeometryBuffer) -> std::io::Result<()> {
    write!(
        writer,
        "ply\nformat binary_little_endian 1.0\ncomment pcd-geometry\nelement vertex {}\nproperty float x\nproperty float y\nproperty float z\nend_header\n",
        geometry.len()
    )?;

    let mut buffer = [0u8; BYTE_STRIDE];
    for vertex in geometry.vertices() {
        LittleEndian::write_f32_into(&vertex.co, &mut buffer);
        writer.write_all(&buffer)?;
    }

    writer.flush()
}
