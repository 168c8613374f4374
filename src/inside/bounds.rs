//! Per-face bounding boxes and the candidate filter built on them.

use crate::float_types::Real;
use crate::grid::Axis;
use crate::index_buffer::FaceIndexBuffer;
use crate::polyhedron::Triangle;
use nalgebra::Point3;

/// Axis-aligned extent of every face, computed once per query.
#[derive(Clone, Debug, Default)]
pub struct FaceBounds {
    mins: Vec<Point3<Real>>,
    maxs: Vec<Point3<Real>>,
}

impl FaceBounds {
    pub fn new(faces: &[Triangle]) -> Self {
        let (mins, maxs) = faces
            .iter()
            .map(|[a, b, c]| (a.inf(b).inf(c), a.sup(b).sup(c)))
            .unzip();
        Self { mins, maxs }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.is_empty()
    }

    #[inline]
    pub fn min(&self, face: usize) -> &Point3<Real> {
        &self.mins[face]
    }

    #[inline]
    pub fn max(&self, face: usize) -> &Point3<Real> {
        &self.maxs[face]
    }

    /// True when `value` lies strictly between the face's extremes on `axis`.
    /// A value exactly on the box boundary does not count.
    #[inline]
    pub fn straddles(&self, face: usize, axis: Axis, value: Real) -> bool {
        let d = axis.index();
        self.mins[face][d] < value && self.maxs[face][d] > value
    }

    /// Replace the contents of `out` with the faces from `source` straddling `value` on `axis`.
    pub fn select<I>(&self, source: I, axis: Axis, value: Real, out: &mut FaceIndexBuffer)
    where
        I: IntoIterator<Item = usize>,
    {
        out.clear();
        for face in source {
            if self.straddles(face, axis, value) {
                out.push(face);
            }
        }
    }
}

/// [`FaceBounds::straddles`] for a single triangle, without building the index.
#[inline]
pub fn triangle_straddles(triangle: &Triangle, axis: Axis, value: Real) -> bool {
    let d = axis.index();
    let [a, b, c] = triangle;
    let lo = a[d].min(b[d]).min(c[d]);
    let hi = a[d].max(b[d]).max(c[d]);
    lo < value && hi > value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: [Real; 3], b: [Real; 3], c: [Real; 3]) -> Triangle {
        [Point3::from(a), Point3::from(b), Point3::from(c)]
    }

    #[test]
    fn bounds_are_componentwise_extremes() {
        let faces = vec![tri([0.0, 5.0, -1.0], [2.0, 1.0, 3.0], [1.0, 4.0, 0.0])];
        let bounds = FaceBounds::new(&faces);
        assert_eq!(bounds.len(), 1);
        assert_eq!(*bounds.min(0), Point3::new(0.0, 1.0, -1.0));
        assert_eq!(*bounds.max(0), Point3::new(2.0, 5.0, 3.0));
    }

    #[test]
    fn select_excludes_box_boundary() {
        let faces = vec![
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([0.5, 0.0, 0.0], [2.0, 0.0, 0.0], [0.5, 1.0, 0.0]),
        ];
        let bounds = FaceBounds::new(&faces);
        let mut out = FaceIndexBuffer::with_capacity(faces.len());

        bounds.select(0..faces.len(), Axis::X, 0.75, &mut out);
        assert_eq!(out.as_slice(), &[0, 1]);

        // 1.0 is face 0's max and 0.5 is face 1's min: both sit on a boundary
        bounds.select(0..faces.len(), Axis::X, 1.0, &mut out);
        assert_eq!(out.as_slice(), &[1]);
        bounds.select(0..faces.len(), Axis::X, 0.5, &mut out);
        assert_eq!(out.as_slice(), &[0]);

        // flat in z: nothing can straddle
        bounds.select(0..faces.len(), Axis::Z, 0.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn second_level_is_subset_of_first() {
        let faces = vec![
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 1.0]),
            tri([0.0, 2.0, 0.0], [1.0, 3.0, 0.0], [0.0, 3.0, 1.0]),
            tri([5.0, 0.0, 0.0], [6.0, 0.0, 0.0], [5.0, 1.0, 1.0]),
        ];
        let bounds = FaceBounds::new(&faces);
        let mut first = FaceIndexBuffer::with_capacity(3);
        let mut second = FaceIndexBuffer::with_capacity(3);

        bounds.select(0..3, Axis::X, 0.25, &mut first);
        assert_eq!(first.as_slice(), &[0, 1]);
        bounds.select(first.iter(), Axis::Y, 0.25, &mut second);
        assert_eq!(second.as_slice(), &[0]);
    }

    #[test]
    fn single_triangle_check_agrees_with_index() {
        let faces = vec![tri([0.0, -1.0, 2.0], [3.0, 1.0, 2.0], [1.0, 0.0, 4.0])];
        let bounds = FaceBounds::new(&faces);
        for axis in Axis::ALL {
            for value in [-1.0, -0.5, 0.0, 1.0, 2.0, 3.0, 3.5, 4.0] {
                assert_eq!(
                    bounds.straddles(0, axis, value),
                    triangle_straddles(&faces[0], axis, value),
                    "{axis:?} {value}"
                );
            }
        }
    }
}
