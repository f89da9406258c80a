use crate::{error::BufferError, vector::Vec3};

/// Packs vectors into one flat `[x0, y0, z0, x1, y1, z1, ...]` component
/// buffer, ready for a vertex buffer upload.
pub fn flatten<T: Copy>(vectors: &[Vec3<T>]) -> Vec<T> {
    let mut components = Vec::with_capacity(vectors.len() * 3);
    for vector in vectors {
        components.extend_from_slice(&vector.to_array());
    }
    components
}

/// Splits a flat component buffer back into vectors.
pub fn unflatten<T: Copy>(components: &[T]) -> Result<Vec<Vec3<T>>, BufferError> {
    if components.len() % 3 != 0 {
        log::warn!("Rejected component buffer of length {}", components.len());
        return Err(BufferError::LengthNotMultipleOfThree {
            len: components.len(),
        });
    }

    let vectors: Vec<Vec3<T>> = components
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect();

    log::debug!("Unpacked {} vectors", vectors.len());
    Ok(vectors)
}

/// Size in bytes of `count` packed vectors, `None` if it overflows `usize`.
pub fn byte_len<T>(count: usize) -> Option<usize> {
    count.checked_mul(3)?.checked_mul(std::mem::size_of::<T>())
}
