//! One-shot advisory warnings raised while tracing.
//!
//! Neither condition stops or alters the computation. Each kind is logged at most once
//! per [`Diagnostics`] value, and every query creates a fresh one, so a later query on
//! unrelated geometry warns again.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

const SINGULAR_WARNING: &str = "A triangle face lies in a plane (numerically) parallel to the traced ray; \
     results near it may be unreliable. Adding a little random noise to the vertex coordinates avoids this.";

const ODD_CROSSINGS_WARNING: &str = "Odd number of crossings found along a ray. The polyhedron may not be closed, \
     or one of its faces may lie exactly along the traced ray.";

/// Counts occurrences of one condition and logs its warning on the first one only.
#[derive(Debug, Default)]
struct Latch {
    hits: AtomicUsize,
    warned: AtomicBool,
}

impl Latch {
    fn trip(&self, message: &str) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        if self
            .warned
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            log::warn!("{message}");
        }
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    fn warned(&self) -> bool {
        self.warned.load(Ordering::Acquire)
    }
}

/// Thread-safe diagnostic state for a single query.
#[derive(Debug, Default)]
pub struct Diagnostics {
    singular: Latch,
    odd_crossings: Latch,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A 2x2 ray/face solve had a pivot denominator below the singular tolerance.
    pub fn report_singular(&self) {
        self.singular.trip(SINGULAR_WARNING);
    }

    /// A ray crossed the surface an odd number of times.
    pub fn report_odd_crossings(&self) {
        self.odd_crossings.trip(ODD_CROSSINGS_WARNING);
    }

    pub fn summary(&self) -> DiagnosticSummary {
        DiagnosticSummary {
            singular_systems: self.singular.hits(),
            odd_crossing_rays: self.odd_crossings.hits(),
            singular_warned: self.singular.warned(),
            odd_crossings_warned: self.odd_crossings.warned(),
        }
    }
}

/// Snapshot of a [`Diagnostics`] value once tracing is done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticSummary {
    /// Number of near-singular face solves.
    pub singular_systems: usize,
    /// Number of rays with an odd crossing count.
    pub odd_crossing_rays: usize,
    pub singular_warned: bool,
    pub odd_crossings_warned: bool,
}

impl DiagnosticSummary {
    /// True when nothing suspicious was seen.
    pub const fn is_clean(&self) -> bool {
        self.singular_systems == 0 && self.odd_crossing_rays == 0
    }
}
