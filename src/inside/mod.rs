//! Grid-accelerated point-in-polyhedron queries.
//!
//! Every grid point is classified by casting a ray along one grid axis and counting the
//! triangle crossings below it: an odd count means inside. Points sharing their two other
//! coordinates share a ray, so crossings are computed once per ray and resolved for the
//! whole row by a linear parity scan. Rays are grouped into slices by a *major* axis and
//! faces are culled per slice, then per ray, by their bounding boxes.
//!
//! The orchestration is provided with dependency inversion ([`InsideOps`]) so a serial or
//! a rayon-backed implementation (feature `parallel`) can be used.

pub mod bounds;
pub mod crossing;
pub mod diagnostics;
pub mod point;
pub mod scan;
pub mod serial;
pub mod trace;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use diagnostics::{DiagnosticSummary, Diagnostics};
pub use trace::{InsideReport, TraceStats};
pub use traits::InsideOps;

pub use serial::SerialInsideOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelInsideOps;

use crate::errors::InsideError;
use crate::float_types::Real;
use crate::grid::AxisOrder;
use crate::polyhedron::{Triangle, build_faces};
use nalgebra::Point3;

/// The implementation selected by the enabled features.
#[cfg(not(feature = "parallel"))]
pub const fn default_ops() -> SerialInsideOps {
    SerialInsideOps::new()
}

/// The implementation selected by the enabled features.
#[cfg(feature = "parallel")]
pub const fn default_ops() -> ParallelInsideOps {
    ParallelInsideOps::new()
}

/// Classify every point of the grid `x` by `y` by `z` against a triangle soup.
///
/// The result for `(x[i], y[j], z[k])` is written to `out[j * nx * nz + i * nz + k]`.
/// Each axis must be sorted ascending (not checked). Only the first `nx * ny * nz`
/// elements of `out` are touched.
///
/// ## Errors
/// [`InsideError::OutputTooSmall`] if `out` cannot hold the whole grid.
///
/// ## Example
/// ```
/// # use inpolyhedron::{inside::inside_polyhedron_into, polyhedron::Polyhedron};
/// let cube = Polyhedron::cube(1.0);
/// let x = [-0.5, 0.3, 1.5];
/// let y = [-0.5, 0.6, 1.5];
/// let z = [-0.5, 0.45, 1.5];
/// let mut out = vec![false; 27];
/// inside_polyhedron_into(&mut out, cube.faces(), &x, &y, &z)?;
/// // (0.3, 0.6, 0.45) sits at j * 9 + i * 3 + k = 13
/// assert!(out[13]);
/// assert_eq!(out.iter().filter(|&&b| b).count(), 1);
/// # Ok::<(), inpolyhedron::errors::InsideError>(())
/// ```
pub fn inside_polyhedron_into(
    out: &mut [bool],
    faces: &[Triangle],
    x: &[Real],
    y: &[Real],
    z: &[Real],
) -> Result<InsideReport, InsideError> {
    let dims = [x.len(), y.len(), z.len()];
    let required: usize = dims.iter().product();
    if out.len() < required {
        return Err(InsideError::OutputTooSmall {
            required,
            actual: out.len(),
        });
    }

    let order = AxisOrder::schedule(dims);
    Ok(default_ops().trace(faces, [x, y, z], order, &mut out[..required]))
}

/// Same as [`inside_polyhedron_into`], with the surface given as a vertex list plus one
/// index triple per triangle.
///
/// ## Errors
/// [`InsideError::FaceIndexOutOfRange`] for an index past the end of `vertices`, and
/// [`InsideError::OutputTooSmall`] as for [`inside_polyhedron_into`].
pub fn inside_polyhedron_indexed_into(
    out: &mut [bool],
    vertices: &[Point3<Real>],
    face_indices: &[[usize; 3]],
    x: &[Real],
    y: &[Real],
    z: &[Real],
) -> Result<InsideReport, InsideError> {
    let faces = build_faces(vertices, face_indices)?;
    inside_polyhedron_into(out, &faces, x, y, z)
}
