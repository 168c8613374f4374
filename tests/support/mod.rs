//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use inpolyhedron::{
    float_types::Real,
    grid::{AxisOrder, GridAxes},
    polyhedron::Polyhedron,
};
use nalgebra::Rotation3;

/// Classify every grid point on its own with [`Polyhedron::contains_point_with`],
/// in the same flat layout the grid query produces.
pub fn brute_force(poly: &Polyhedron, grid: &GridAxes, order: &AxisOrder) -> Vec<bool> {
    let [nx, ny, nz] = grid.dims();
    let mut out = vec![false; grid.len()];
    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                out[grid.index(i, j, k)] = poly.contains_point_with(&grid.point(i, j, k), order);
            }
        }
    }
    out
}

/// Flat indices where two results disagree, for readable assertion messages.
pub fn mismatches(a: &[bool], b: &[bool]) -> Vec<usize> {
    assert_eq!(a.len(), b.len(), "result lengths differ");
    a.iter()
        .zip(b)
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

/// A sphere rotated by an arbitrary angle so no vertex or edge lines up with the grid.
pub fn tilted_sphere(radius: Real) -> Polyhedron {
    let rotation = Rotation3::from_euler_angles(0.31, 0.77, 1.13).to_homogeneous();
    Polyhedron::sphere(radius, 24, 12).transform(&rotation)
}

/// Unit cube with one of its top triangles removed.
pub fn open_cube() -> Polyhedron {
    let mut faces = Polyhedron::cube(1.0).into_faces();
    // faces 2 and 3 form the top quad; 2 covers the half where y < x
    faces.remove(2);
    Polyhedron::from_faces(faces)
}

/// Grid of `counts` points over the cube `[-extent, extent]^3`.
pub fn centered_grid(extent: Real, counts: [usize; 3]) -> GridAxes {
    GridAxes::spanning(
        &nalgebra::Point3::new(-extent, -extent, -extent),
        &nalgebra::Point3::new(extent, extent, extent),
        counts,
    )
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
