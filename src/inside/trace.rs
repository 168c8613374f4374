//! Per-slice tracing shared by the serial and parallel drivers.
//!
//! A *slice* is every grid point with one fixed major coordinate. Slices are independent:
//! each one is traced into a staging buffer laid out `[minor][ray]` and then scattered
//! into the caller's output with the strides from [`AxisOrder::strides`].

use super::bounds::FaceBounds;
use super::crossing::collect_crossings;
use super::diagnostics::{DiagnosticSummary, Diagnostics};
use super::scan::scan_parity;
use crate::float_types::Real;
use crate::grid::{AxisCoords, AxisOrder};
use crate::index_buffer::FaceIndexBuffer;
use crate::polyhedron::Triangle;
use std::ops::{Add, AddAssign};

/// Work counters for one query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Rays that reached the intersector (both filters left candidates).
    pub rays_traced: usize,
    /// Ray/face solves performed.
    pub faces_tested: usize,
    /// Accepted crossings over all rays.
    pub crossings: usize,
}

impl Add for TraceStats {
    type Output = TraceStats;

    fn add(self, other: TraceStats) -> TraceStats {
        TraceStats {
            rays_traced: self.rays_traced + other.rays_traced,
            faces_tested: self.faces_tested + other.faces_tested,
            crossings: self.crossings + other.crossings,
        }
    }
}

impl AddAssign for TraceStats {
    fn add_assign(&mut self, other: TraceStats) {
        *self = *self + other;
    }
}

/// What a grid query did, besides filling the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsideReport {
    pub order: AxisOrder,
    pub stats: TraceStats,
    pub diagnostics: DiagnosticSummary,
}

/// Buffers owned by one worker. Never shared between concurrent slices.
#[derive(Debug)]
pub struct SliceScratch {
    major: FaceIndexBuffer,
    minor: FaceIndexBuffer,
    crossings: Vec<Real>,
}

impl SliceScratch {
    pub fn new(face_count: usize) -> Self {
        Self {
            major: FaceIndexBuffer::with_capacity(face_count),
            minor: FaceIndexBuffer::with_capacity(face_count),
            crossings: Vec::new(),
        }
    }
}

/// Everything fixed for the duration of one query.
pub struct TraceContext<'a> {
    faces: &'a [Triangle],
    bounds: FaceBounds,
    coords: AxisCoords<'a>,
    order: AxisOrder,
    extents: [usize; 3],
    strides: [usize; 3],
    diagnostics: Diagnostics,
}

impl<'a> TraceContext<'a> {
    pub fn new(faces: &'a [Triangle], coords: AxisCoords<'a>, order: AxisOrder) -> Self {
        let dims = coords.map(|axis| axis.len());
        log::debug!(
            "tracing {} faces on a {}x{}x{} grid, order {:?}",
            faces.len(),
            dims[0],
            dims[1],
            dims[2],
            order.axes()
        );
        Self {
            faces,
            bounds: FaceBounds::new(faces),
            coords,
            order,
            extents: order.extents(dims),
            strides: order.strides(dims),
            diagnostics: Diagnostics::new(),
        }
    }

    /// `[n_major, n_minor, n_ray]`
    #[inline]
    pub const fn extents(&self) -> [usize; 3] {
        self.extents
    }

    /// Number of grid points in one slice.
    #[inline]
    pub const fn slice_len(&self) -> usize {
        self.extents[1] * self.extents[2]
    }

    /// Number of grid points overall.
    #[inline]
    pub const fn grid_len(&self) -> usize {
        self.extents[0] * self.slice_len()
    }

    pub fn scratch(&self) -> SliceScratch {
        SliceScratch::new(self.faces.len())
    }

    /// Trace major position `i` into `slice` (`[minor][ray]` layout, `slice_len()` long).
    pub fn trace_slice(&self, i: usize, scratch: &mut SliceScratch, slice: &mut [bool]) -> TraceStats {
        let mut stats = TraceStats::default();
        slice.fill(false);

        let [major, minor, ray] = self.order.axes();
        let major_coord = self.coords[major.index()][i];
        self.bounds.select(0..self.faces.len(), major, major_coord, &mut scratch.major);
        if scratch.major.is_empty() {
            return stats;
        }

        let ray_coords = self.coords[ray.index()];
        let n_ray = self.extents[2];
        for (j, &minor_coord) in self.coords[minor.index()].iter().enumerate() {
            self.bounds
                .select(scratch.major.iter(), minor, minor_coord, &mut scratch.minor);
            if scratch.minor.is_empty() {
                continue;
            }

            stats.rays_traced += 1;
            stats.faces_tested += collect_crossings(
                self.faces,
                &scratch.minor,
                [major_coord, minor_coord],
                &self.order,
                &self.diagnostics,
                &mut scratch.crossings,
            );
            stats.crossings += scratch.crossings.len();

            let row = &mut slice[j * n_ray..(j + 1) * n_ray];
            scan_parity(&scratch.crossings, ray_coords, &self.diagnostics, row);
        }
        stats
    }

    /// Copy a traced slice into the caller's output.
    pub fn scatter(&self, i: usize, slice: &[bool], out: &mut [bool]) {
        let [s0, s1, s2] = self.strides;
        let n_ray = self.extents[2];
        let base = i * s0;
        for (j, row) in slice.chunks_exact(n_ray).enumerate() {
            let row_base = base + j * s1;
            for (k, &inside) in row.iter().enumerate() {
                out[row_base + k * s2] = inside;
            }
        }
    }

    pub fn finish(self, stats: TraceStats) -> InsideReport {
        let diagnostics = self.diagnostics.summary();
        log::debug!(
            "traced {} rays, {} face tests, {} crossings",
            stats.rays_traced,
            stats.faces_tested,
            stats.crossings
        );
        InsideReport {
            order: self.order,
            stats,
            diagnostics,
        }
    }
}
