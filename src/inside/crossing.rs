//! Ray/triangle crossings for axis-aligned rays.
//!
//! The ray runs along the *ray* axis through a fixed `(major, minor)` coordinate pair.
//! Restricted to the two filter axes, a triangle `P0 P1 P2` covers that pair when
//!
//! ```text
//! P0 + b0 * (P1 - P0) + b1 * (P2 - P0) = (c_major, c_minor)
//! ```
//!
//! has a solution strictly inside the triangle (`b0 > 0`, `b1 > 0`, `b0 + b1 < 1`).
//! Edges and vertices never count as crossings.

use super::diagnostics::Diagnostics;
use crate::float_types::{Real, singular_tolerance};
use crate::grid::AxisOrder;
use crate::index_buffer::FaceIndexBuffer;
use crate::polyhedron::Triangle;
use nalgebra::{Matrix2, Vector2};
use std::cmp::Ordering;

/// Solve `a * b = rhs` by Gaussian elimination with partial pivoting.
///
/// Returns the solution and whether one of the two pivot denominators fell below
/// `tolerance` in magnitude. A near-singular solution is still returned.
#[inline]
pub fn solve_2x2(a: &Matrix2<Real>, rhs: &Vector2<Real>, tolerance: Real) -> (Vector2<Real>, bool) {
    if a[(0, 0)].abs() > a[(1, 0)].abs() {
        let fac = a[(1, 0)] / a[(0, 0)];
        let a22 = a[(1, 1)] - a[(0, 1)] * fac;
        let b1 = (rhs[1] - rhs[0] * fac) / a22;
        let b0 = (rhs[0] - a[(0, 1)] * b1) / a[(0, 0)];
        let singular = a22.abs() < tolerance || a[(0, 0)].abs() < tolerance;
        (Vector2::new(b0, b1), singular)
    } else {
        // second row pivots
        let fac = a[(0, 0)] / a[(1, 0)];
        let a12 = a[(0, 1)] - a[(1, 1)] * fac;
        let b1 = (rhs[0] - rhs[1] * fac) / a12;
        let b0 = (rhs[1] - a[(1, 1)] * b1) / a[(1, 0)];
        let singular = a12.abs() < tolerance || a[(1, 0)].abs() < tolerance;
        (Vector2::new(b0, b1), singular)
    }
}

/// Ray-axis coordinate where the ray through `coords` pierces the interior of `triangle`.
///
/// `coords` holds the ray's major and minor coordinates, in that order.
#[inline]
pub fn ray_crossing(
    triangle: &Triangle,
    coords: [Real; 2],
    order: &AxisOrder,
    tolerance: Real,
    diagnostics: &Diagnostics,
) -> Option<Real> {
    let [d0, d1, r] = order.axes().map(|axis| axis.index());
    let [p0, p1, p2] = triangle;
    let e1 = p1 - p0;
    let e2 = p2 - p0;

    let a = Matrix2::new(e1[d0], e2[d0], e1[d1], e2[d1]);
    let rhs = Vector2::new(coords[0] - p0[d0], coords[1] - p0[d1]);
    let (b, singular) = solve_2x2(&a, &rhs, tolerance);
    if singular {
        diagnostics.report_singular();
    }

    if b[0] > 0.0 && b[1] > 0.0 && b[0] + b[1] < 1.0 {
        Some(p0[r] + b[0] * e1[r] + b[1] * e2[r])
    } else {
        None
    }
}

/// Collect the crossings of every candidate face into `out`, sorted ascending.
///
/// Returns the number of faces tested.
pub fn collect_crossings(
    faces: &[Triangle],
    candidates: &FaceIndexBuffer,
    coords: [Real; 2],
    order: &AxisOrder,
    diagnostics: &Diagnostics,
    out: &mut Vec<Real>,
) -> usize {
    out.clear();
    let tolerance = singular_tolerance();
    out.extend(
        candidates
            .iter()
            .filter_map(|face| ray_crossing(&faces[face], coords, order, tolerance, diagnostics)),
    );
    sort_crossings(out);
    candidates.len()
}

#[inline]
pub fn sort_crossings(crossings: &mut [Real]) {
    crossings.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Axis;
    use nalgebra::Point3;

    fn tri(a: [Real; 3], b: [Real; 3], c: [Real; 3]) -> Triangle {
        [Point3::from(a), Point3::from(b), Point3::from(c)]
    }

    #[test]
    fn solve_matches_direct_inverse() {
        let a = Matrix2::new(3.0, 1.0, -2.0, 4.0);
        let rhs = Vector2::new(5.0, 6.0);
        let (b, singular) = solve_2x2(&a, &rhs, 1e-14);
        let expected = a.try_inverse().unwrap() * rhs;
        assert!(!singular);
        assert!((b - expected).norm() < 1e-12);

        // pivot on the second row
        let a = Matrix2::new(0.5, 2.0, 4.0, 1.0);
        let (b, singular) = solve_2x2(&a, &rhs, 1e-14);
        let expected = a.try_inverse().unwrap() * rhs;
        assert!(!singular);
        assert!((b - expected).norm() < 1e-12);
    }

    #[test]
    fn solve_flags_parallel_face() {
        // rank-deficient system: both rows are multiples of each other
        let a = Matrix2::new(1.0, 2.0, 2.0, 4.0);
        let (_, singular) = solve_2x2(&a, &Vector2::new(1.0, 2.0), 1e-14);
        assert!(singular);
    }

    #[test]
    fn crossing_inside_triangle() {
        // slanted triangle: z = 1 + x + y over the unit right triangle
        let t = tri([0.0, 0.0, 1.0], [1.0, 0.0, 2.0], [0.0, 1.0, 2.0]);
        let d = Diagnostics::new();
        let z = ray_crossing(&t, [0.25, 0.25], &AxisOrder::default(), 1e-14, &d).unwrap();
        assert!((z - 1.5).abs() < 1e-12);
        assert!(d.summary().is_clean());
    }

    #[test]
    fn edges_and_outside_points_are_rejected() {
        let t = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let d = Diagnostics::new();
        let order = AxisOrder::default();
        // on the hypotenuse, on a leg, at a vertex, outside
        for coords in [[0.5, 0.5], [0.5, 0.0], [0.0, 0.0], [0.8, 0.8]] {
            assert!(ray_crossing(&t, coords, &order, 1e-14, &d).is_none(), "{coords:?}");
        }
    }

    #[test]
    fn vertical_face_is_reported_singular() {
        // the plane x = 0 contains every ray along z with x = 0
        let t = tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        let d = Diagnostics::new();
        let _ = ray_crossing(&t, [0.0, 0.25], &AxisOrder::default(), 1e-14, &d);
        assert_eq!(d.summary().singular_systems, 1);
    }

    #[test]
    fn crossings_come_out_sorted() {
        let faces = vec![
            tri([-1.0, -1.0, 3.0], [2.0, -1.0, 3.0], [-1.0, 2.0, 3.0]),
            tri([-1.0, -1.0, -2.0], [2.0, -1.0, -2.0], [-1.0, 2.0, -2.0]),
            tri([-1.0, -1.0, 0.5], [2.0, -1.0, 0.5], [-1.0, 2.0, 0.5]),
        ];
        let mut candidates = FaceIndexBuffer::with_capacity(faces.len());
        for i in 0..faces.len() {
            candidates.push(i);
        }
        let order = AxisOrder::new(Axis::X, Axis::Y, Axis::Z);
        let mut out = Vec::new();
        let tested = collect_crossings(
            &faces,
            &candidates,
            [0.0, 0.0],
            &order,
            &Diagnostics::new(),
            &mut out,
        );
        assert_eq!(tested, 3);
        assert_eq!(out, vec![-2.0, 0.5, 3.0]);
    }

    #[test]
    fn ray_axis_follows_order() {
        // triangle in the plane y = 2, hit by a ray along y through (x, z) = (0.2, 0.3)
        let t = tri([0.0, 2.0, 0.0], [1.0, 2.0, 0.0], [0.0, 2.0, 1.0]);
        let order = AxisOrder::new(Axis::Z, Axis::X, Axis::Y);
        let y = ray_crossing(&t, [0.3, 0.2], &order, 1e-14, &Diagnostics::new()).unwrap();
        assert!((y - 2.0).abs() < 1e-12);
    }
}
