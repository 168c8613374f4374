// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized singular tolerance used by the 2x2 ray/face solve.
/// A pivot denominator with magnitude below this value marks the face plane as
/// numerically parallel to the traced ray. Defaults to `1e-14`, but can be overridden:
///  1) **Build-time**: set env var `INPOLYHEDRON_SINGULAR_TOLERANCE`
///     (e.g. `INPOLYHEDRON_SINGULAR_TOLERANCE=1e-12 cargo build`)
///  2) **Runtime**: call [`set_singular_tolerance`] once before using the library
static SINGULAR_TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_singular_tolerance() -> Real {
    1e-14
}

/// Returns the current singular tolerance.
/// If not set yet, it tries `INPOLYHEDRON_SINGULAR_TOLERANCE` (parsed as `Real`) and
/// falls back to `1e-14`.
pub fn singular_tolerance() -> Real {
    *SINGULAR_TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("INPOLYHEDRON_SINGULAR_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(0.0);
            }
        }
        default_singular_tolerance()
    })
}

/// Set the singular tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `inpolyhedron::float_types::set_singular_tolerance(1e-12);`
pub fn set_singular_tolerance(value: Real) {
    let _ = SINGULAR_TOLERANCE_CELL.set(value.max(0.0));
}

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance_is_tiny_and_positive() {
        let tol = singular_tolerance();
        assert!(tol > 0.0);
        assert!(tol < 1e-6);
    }
}
