//! Traits defining grid tracing for dependency inversion

use super::trace::InsideReport;
use crate::grid::{AxisCoords, AxisOrder};
use crate::polyhedron::Triangle;

/// Core grid inside/outside operation.
pub trait InsideOps {
    /// Classify every point of the grid spanned by `coords` against `faces`.
    ///
    /// `out` must hold at least `nx * ny * nz` values; the first `nx * ny * nz` are each
    /// written exactly once, in the meshgrid layout of [`crate::grid::GridAxes::index`].
    fn trace(
        &self,
        faces: &[Triangle],
        coords: AxisCoords<'_>,
        order: AxisOrder,
        out: &mut [bool],
    ) -> InsideReport;
}
