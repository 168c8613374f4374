//! Single-point ray casting.
//!
//! Classifies one point with exactly the rules the grid path uses (strict bounding-box
//! straddling, strict triangle interior, crossings strictly below the point), but with no
//! reuse between points. It is the reference the grid results are checked against.

use super::bounds::triangle_straddles;
use super::crossing::{ray_crossing, sort_crossings};
use super::diagnostics::Diagnostics;
use super::scan::scan_parity;
use crate::float_types::{Real, singular_tolerance};
use crate::grid::AxisOrder;
use crate::polyhedron::Triangle;
use nalgebra::Point3;

/// Whether `point` is inside the surface formed by `faces`, casting along `order.ray()`.
pub fn point_inside(
    faces: &[Triangle],
    point: &Point3<Real>,
    order: &AxisOrder,
    diagnostics: &Diagnostics,
) -> bool {
    let [major, minor, ray] = order.axes();
    let coords = [point[major.index()], point[minor.index()]];
    let tolerance = singular_tolerance();

    let mut crossings: Vec<Real> = faces
        .iter()
        .filter(|triangle| {
            triangle_straddles(triangle, major, coords[0])
                && triangle_straddles(triangle, minor, coords[1])
        })
        .filter_map(|triangle| ray_crossing(triangle, coords, order, tolerance, diagnostics))
        .collect();
    sort_crossings(&mut crossings);

    let mut inside = [false];
    scan_parity(&crossings, &[point[ray.index()]], diagnostics, &mut inside);
    inside[0]
}
