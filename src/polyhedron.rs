//! `Polyhedron` struct: a closed surface given as a list of triangles

use crate::errors::InsideError;
use crate::float_types::Real;
use crate::grid::{AxisOrder, GridAxes, InsideGrid};
use crate::inside::{self, Diagnostics, InsideOps};
use nalgebra::{Matrix4, Point3, Translation3, Vector3};

/// Three vertices; winding does not matter for inside/outside queries.
pub type Triangle = [Point3<Real>; 3];

/// Materialize one triangle per index triple.
///
/// ## Errors
/// [`InsideError::FaceIndexOutOfRange`] on the first index past the end of `vertices`.
pub fn build_faces(
    vertices: &[Point3<Real>],
    face_indices: &[[usize; 3]],
) -> Result<Vec<Triangle>, InsideError> {
    face_indices
        .iter()
        .enumerate()
        .map(|(face, indices)| {
            let mut triangle = [Point3::origin(); 3];
            for (slot, &index) in triangle.iter_mut().zip(indices) {
                *slot = *vertices.get(index).ok_or(InsideError::FaceIndexOutOfRange {
                    face,
                    index,
                    vertex_count: vertices.len(),
                })?;
            }
            Ok(triangle)
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyhedron {
    faces: Vec<Triangle>,
}

impl Polyhedron {
    pub const fn from_faces(faces: Vec<Triangle>) -> Self {
        Self { faces }
    }

    /// Build from a vertex list and one index triple per triangle.
    ///
    /// ## Example
    /// ```
    /// # use inpolyhedron::polyhedron::Polyhedron;
    /// # use nalgebra::Point3;
    /// let vertices = [
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(0.0, 0.0, 1.0),
    /// ];
    /// let tetra = Polyhedron::from_indexed(&vertices, &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]])?;
    /// assert_eq!(tetra.len(), 4);
    /// assert!(Polyhedron::from_indexed(&vertices, &[[0, 1, 4]]).is_err());
    /// # Ok::<(), inpolyhedron::errors::InsideError>(())
    /// ```
    pub fn from_indexed(
        vertices: &[Point3<Real>],
        face_indices: &[[usize; 3]],
    ) -> Result<Self, InsideError> {
        Ok(Self::from_faces(build_faces(vertices, face_indices)?))
    }

    pub fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    pub fn into_faces(self) -> Vec<Triangle> {
        self.faces
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Smallest axis-aligned box holding every vertex, `None` without faces.
    pub fn bounds(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let first = self.faces.first()?[0];
        Some(
            self.faces
                .iter()
                .flatten()
                .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p))),
        )
    }

    /// Apply an affine transform to every vertex.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let faces = self
            .faces
            .iter()
            .map(|triangle| triangle.map(|p| matrix.transform_point(&p)))
            .collect();
        Self::from_faces(faces)
    }

    pub fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.transform(&Translation3::from(Vector3::new(x, y, z)).to_homogeneous())
    }

    /// Classify every point of `grid`, with the axis order picked by [`GridAxes::schedule`].
    pub fn inside_grid(&self, grid: &GridAxes) -> InsideGrid {
        self.inside_grid_with(grid, grid.schedule())
    }

    /// Classify every point of `grid` with an explicit axis order.
    ///
    /// The result does not depend on `order` for generic geometry; only the amount of
    /// work does.
    pub fn inside_grid_with(&self, grid: &GridAxes, order: AxisOrder) -> InsideGrid {
        let mut values = vec![false; grid.len()];
        let report = inside::default_ops().trace(&self.faces, grid.coords(), order, &mut values);
        InsideGrid::new(grid.dims(), values, report)
    }

    /// Whether `point` is inside, casting a single ray along Z.
    ///
    /// ```
    /// # use inpolyhedron::polyhedron::Polyhedron;
    /// # use nalgebra::Point3;
    /// let cube = Polyhedron::cube(6.0);
    /// assert!(cube.contains_point(&Point3::new(3.0, 2.0, 3.0)));
    /// assert!(cube.contains_point(&Point3::new(1.0, 2.0, 5.9)));
    /// assert!(!cube.contains_point(&Point3::new(3.0, 2.0, 6.5)));
    /// assert!(!cube.contains_point(&Point3::new(3.0, 2.0, -6.0)));
    /// ```
    pub fn contains_point(&self, point: &Point3<Real>) -> bool {
        self.contains_point_with(point, &AxisOrder::default())
    }

    /// Whether `point` is inside, casting a single ray along `order.ray()`.
    ///
    /// With the same `order`, this gives exactly the value a grid query reports for a
    /// grid point at `point`.
    pub fn contains_point_with(&self, point: &Point3<Real>, order: &AxisOrder) -> bool {
        inside::point::point_inside(&self.faces, point, order, &Diagnostics::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_faces_copies_vertices_in_order() {
        let vertices = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ];
        let faces = build_faces(&vertices, &[[2, 0, 1]]).unwrap();
        assert_eq!(faces, vec![[vertices[2], vertices[0], vertices[1]]]);
    }

    #[test]
    fn build_faces_reports_bad_index() {
        let vertices = [Point3::new(0.0, 0.0, 0.0); 3];
        let err = build_faces(&vertices, &[[0, 1, 2], [0, 3, 1]]).unwrap_err();
        match err {
            InsideError::FaceIndexOutOfRange {
                face,
                index,
                vertex_count,
            } => {
                assert_eq!((face, index, vertex_count), (1, 3, 3));
            },
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn bounds_of_translated_cube() {
        let cube = Polyhedron::cube(2.0).translate(1.0, -1.0, 0.5);
        let (lo, hi) = cube.bounds().unwrap();
        assert_eq!(lo, Point3::new(1.0, -1.0, 0.5));
        assert_eq!(hi, Point3::new(3.0, 1.0, 2.5));
        assert!(Polyhedron::default().bounds().is_none());
    }
}
