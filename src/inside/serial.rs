//! Serial implementation of grid tracing

use super::trace::{InsideReport, TraceContext, TraceStats};
use super::traits::InsideOps;
use crate::grid::{AxisCoords, AxisOrder};
use crate::polyhedron::Triangle;

/// Serial implementation of `InsideOps`.
pub struct SerialInsideOps;

impl Default for SerialInsideOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialInsideOps {
    pub const fn new() -> Self {
        Self
    }
}

impl InsideOps for SerialInsideOps {
    fn trace(
        &self,
        faces: &[Triangle],
        coords: AxisCoords<'_>,
        order: AxisOrder,
        out: &mut [bool],
    ) -> InsideReport {
        let ctx = TraceContext::new(faces, coords, order);
        if ctx.grid_len() == 0 {
            return ctx.finish(TraceStats::default());
        }

        // one slice buffer and one set of scratch buffers, reused for every slice
        let mut scratch = ctx.scratch();
        let mut slice = vec![false; ctx.slice_len()];
        let mut stats = TraceStats::default();
        for i in 0..ctx.extents()[0] {
            stats += ctx.trace_slice(i, &mut scratch, &mut slice);
            ctx.scatter(i, &slice, out);
        }
        ctx.finish(stats)
    }
}
