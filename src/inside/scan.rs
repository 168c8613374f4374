//! Parity scan along one ray.

use super::diagnostics::Diagnostics;
use crate::float_types::Real;

/// Resolve inside/outside for every coordinate of a ray.
///
/// Both `crossings` and `ray_coords` must be sorted ascending. Walking them together,
/// the flag flips once for each crossing strictly below the current coordinate, so
/// `row[k]` ends up `true` when an odd number of crossings lie below `ray_coords[k]`.
/// An odd total is reported to `diagnostics` and otherwise tolerated.
pub fn scan_parity(
    crossings: &[Real],
    ray_coords: &[Real],
    diagnostics: &Diagnostics,
    row: &mut [bool],
) {
    debug_assert_eq!(ray_coords.len(), row.len());
    if crossings.len() % 2 == 1 {
        diagnostics.report_odd_crossings();
    }

    let mut inside = false;
    let mut passed = 0;
    for (slot, &coord) in row.iter_mut().zip(ray_coords) {
        while passed < crossings.len() && crossings[passed] < coord {
            passed += 1;
            inside = !inside;
        }
        *slot = inside;
    }
}
