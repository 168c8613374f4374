//! Fixed-capacity face index buffer used for candidate face lists.

use std::ops::Index;

/// A list of face indices whose capacity is reserved once, up front, to the face count.
///
/// The hot filtering loops only ever `clear` and `push`; since a candidate list can never
/// hold more entries than there are faces, the backing storage is never reallocated.
#[derive(Clone, Debug, Default)]
pub struct FaceIndexBuffer {
    indices: Vec<usize>,
}

impl FaceIndexBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
        }
    }

    /// Reset to empty, keeping the reserved capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Append an index. The caller guarantees the buffer is not full.
    #[inline]
    pub fn push(&mut self, index: usize) {
        debug_assert!(
            self.indices.len() < self.indices.capacity(),
            "face index buffer overflow (capacity {})",
            self.indices.capacity()
        );
        self.indices.push(index);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.indices.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.indices.iter().copied()
    }
}

impl Index<usize> for FaceIndexBuffer {
    type Output = usize;

    #[inline]
    fn index(&self, position: usize) -> &usize {
        &self.indices[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = FaceIndexBuffer::with_capacity(4);
        let cap = buf.capacity();
        for i in 0..4 {
            buf.push(i * 10);
        }
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[2], 20);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);
        buf.push(7);
        assert_eq!(buf.as_slice(), &[7]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn push_past_capacity_is_caught_in_debug() {
        let mut buf = FaceIndexBuffer::with_capacity(0);
        buf.push(1);
    }
}
