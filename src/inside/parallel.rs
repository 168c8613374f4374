//! Parallel implementation of grid tracing

use super::trace::{InsideReport, TraceContext, TraceStats};
use super::traits::InsideOps;
use crate::grid::{AxisCoords, AxisOrder};
use crate::polyhedron::Triangle;
use rayon::prelude::*;

/// Parallel implementation of `InsideOps`.
///
/// Major-axis slices are traced concurrently, each worker with its own scratch buffers,
/// into disjoint chunks of a staging buffer that is then scattered into the output.
pub struct ParallelInsideOps;

impl Default for ParallelInsideOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelInsideOps {
    pub const fn new() -> Self {
        Self
    }
}

impl InsideOps for ParallelInsideOps {
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

        let slice_len = ctx.slice_len();
        let mut staged = vec![false; ctx.grid_len()];
        let stats = staged
            .par_chunks_mut(slice_len)
            .enumerate()
            .map_init(
                || ctx.scratch(),
                |scratch, (i, slice)| ctx.trace_slice(i, scratch, slice),
            )
            .reduce(TraceStats::default, |a, b| a + b);

        for (i, slice) in staged.chunks_exact(slice_len).enumerate() {
            ctx.scatter(i, slice, out);
        }
        ctx.finish(stats)
    }
}
