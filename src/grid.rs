//! Query grid description, axis scheduling and the output layout.
//!
//! The result for grid point `(x[i], y[j], z[k])` lives at flat index
//! `j * nx * nz + i * nz + k`: the row-major view of the `[ny][nx][nz]` array a
//! `meshgrid(x, y, z)` call produces, with `z` contiguous. When `ny == nz` this is the
//! same as `j * nx * ny + i * ny + k`.
//! Every writer in the crate goes through [`GridAxes::index`] or [`AxisOrder::strides`],
//! both of which encode that layout.

use crate::float_types::Real;
use crate::inside::InsideReport;
use nalgebra::Point3;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a `Point3`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Roles of the three axes during a grid query.
///
/// The *major* and *minor* axes are used for bounding-box culling in the two outer
/// loops; rays are cast along the *ray* axis and resolved by parity counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisOrder {
    axes: [Axis; 3],
}

impl Default for AxisOrder {
    fn default() -> Self {
        Self { axes: Axis::ALL }
    }
}

impl AxisOrder {
    /// Build an explicit order.
    ///
    /// # Panics
    /// If the three axes are not a permutation of `X`, `Y`, `Z`.
    pub fn new(major: Axis, minor: Axis, ray: Axis) -> Self {
        assert!(
            major != minor && minor != ray && major != ray,
            "axis order must be a permutation of X, Y, Z (got {major:?}, {minor:?}, {ray:?})"
        );
        Self {
            axes: [major, minor, ray],
        }
    }

    /// Choose the cheapest order for a grid of `dims = [nx, ny, nz]` points.
    ///
    /// Crossings are computed once per (major, minor) pair while the ray axis is only
    /// scanned, so the two shortest axes become the filter axes and the longest one
    /// becomes the ray axis. Equal lengths keep the natural X, Y, Z order.
    pub fn schedule(dims: [usize; 3]) -> Self {
        let mut axes = Axis::ALL;
        axes.sort_by_key(|axis| dims[axis.index()]);
        Self { axes }
    }

    /// Every possible order, handy for comparing results across orders.
    pub fn permutations() -> [AxisOrder; 6] {
        use Axis::*;
        [
            Self::new(X, Y, Z),
            Self::new(X, Z, Y),
            Self::new(Y, X, Z),
            Self::new(Y, Z, X),
            Self::new(Z, X, Y),
            Self::new(Z, Y, X),
        ]
    }

    #[inline]
    pub const fn major(&self) -> Axis {
        self.axes[0]
    }

    #[inline]
    pub const fn minor(&self) -> Axis {
        self.axes[1]
    }

    #[inline]
    pub const fn ray(&self) -> Axis {
        self.axes[2]
    }

    #[inline]
    pub const fn axes(&self) -> [Axis; 3] {
        self.axes
    }

    /// Grid lengths in role order: `[n_major, n_minor, n_ray]`.
    pub fn extents(&self, dims: [usize; 3]) -> [usize; 3] {
        self.axes.map(|axis| dims[axis.index()])
    }

    /// Output strides in role order, so that major position `i`, minor position `j`
    /// and ray position `k` land at `i * s[0] + j * s[1] + k * s[2]`.
    pub fn strides(&self, dims: [usize; 3]) -> [usize; 3] {
        let [nx, _, nz] = dims;
        // physical strides of the meshgrid layout: x -> nz, y -> nx*nz, z -> 1
        let physical = [nz, nx * nz, 1];
        self.axes.map(|axis| physical[axis.index()])
    }
}

/// Borrowed grid coordinates, indexed by [`Axis::index`].
pub type AxisCoords<'a> = [&'a [Real]; 3];

/// Coordinates of an axis-aligned query grid.
///
/// Each sequence is expected to be sorted ascending; this is not validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridAxes {
    pub x: Vec<Real>,
    pub y: Vec<Real>,
    pub z: Vec<Real>,
}

impl GridAxes {
    pub const fn new(x: Vec<Real>, y: Vec<Real>, z: Vec<Real>) -> Self {
        Self { x, y, z }
    }

    /// Evenly spaced grid covering the box `[min, max]` with `counts[a]` points on axis `a`.
    /// An axis with a single point sits at `min`.
    pub fn spanning(min: &Point3<Real>, max: &Point3<Real>, counts: [usize; 3]) -> Self {
        let linspace = |lo: Real, hi: Real, n: usize| -> Vec<Real> {
            match n {
                0 => Vec::new(),
                1 => vec![lo],
                _ => {
                    let step = (hi - lo) / (n - 1) as Real;
                    (0..n).map(|i| lo + i as Real * step).collect()
                },
            }
        };
        Self {
            x: linspace(min.x, max.x, counts[0]),
            y: linspace(min.y, max.y, counts[1]),
            z: linspace(min.z, max.z, counts[2]),
        }
    }

    /// `[nx, ny, nz]`
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        [self.x.len(), self.y.len(), self.z.len()]
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len() * self.z.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn axis(&self, axis: Axis) -> &[Real] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn coords(&self) -> AxisCoords<'_> {
        [&self.x, &self.y, &self.z]
    }

    /// Flat output index of `(x[i], y[j], z[k])`.
    #[inline]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        let [nx, _, nz] = self.dims();
        j * nx * nz + i * nz + k
    }

    pub fn point(&self, i: usize, j: usize, k: usize) -> Point3<Real> {
        Point3::new(self.x[i], self.y[j], self.z[k])
    }

    /// The order [`AxisOrder::schedule`] picks for this grid.
    pub fn schedule(&self) -> AxisOrder {
        AxisOrder::schedule(self.dims())
    }
}

/// Inside/outside flags for every point of a [`GridAxes`], plus what it took to get them.
#[derive(Clone, Debug)]
pub struct InsideGrid {
    dims: [usize; 3],
    values: Vec<bool>,
    report: InsideReport,
}

impl InsideGrid {
    pub(crate) const fn new(dims: [usize; 3], values: Vec<bool>, report: InsideReport) -> Self {
        Self {
            dims,
            values,
            report,
        }
    }

    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Whether `(x[i], y[j], z[k])` is inside.
    pub fn get(&self, i: usize, j: usize, k: usize) -> bool {
        let [nx, _, nz] = self.dims;
        self.values[j * nx * nz + i * nz + k]
    }

    /// Flags in the meshgrid layout described in the module docs.
    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.values
    }

    pub fn count_inside(&self) -> usize {
        self.values.iter().filter(|&&inside| inside).count()
    }

    pub const fn report(&self) -> &InsideReport {
        &self.report
    }
}
