//! A fast, optionally multithreaded **point-in-polyhedron** library for grids.
//!
//! Given a closed triangle mesh and three sorted coordinate axes, classify every point of
//! the axis-aligned grid as inside or outside the mesh. Points are resolved by casting
//! rays along one grid axis and counting crossings; the grid structure lets every ray be
//! shared by a whole row of points and lets faces be culled by their bounding boxes once
//! per slice and once per ray.
//!
//! ```
//! use inpolyhedron::{grid::GridAxes, polyhedron::Polyhedron};
//! use nalgebra::Point3;
//!
//! let sphere = Polyhedron::sphere(1.0, 32, 16);
//! let grid = GridAxes::spanning(&Point3::new(-1.5, -1.5, -1.5), &Point3::new(1.5, 1.5, 1.5), [16, 16, 40]);
//! let inside = sphere.inside_grid(&grid);
//! // (0.1, 0.1, 0.04) is near the center
//! assert!(inside.get(8, 8, 20));
//! // corners are well outside
//! assert!(!inside.get(0, 0, 0));
//! ```
//!
//! # Features
//! #### Default
//! - **stl-io**: `.stl` import and ASCII export
//! - **cli**: the `inpolyhedron` command line tool
//!
//! #### Optional
//! - **parallel**: use rayon to trace grid slices on multiple threads

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod grid;
pub mod index_buffer;
pub mod inside;
pub mod io;
pub mod polyhedron;
pub mod shapes;

pub use errors::InsideError;
pub use grid::{Axis, AxisOrder, GridAxes, InsideGrid};
pub use inside::{InsideReport, inside_polyhedron_indexed_into, inside_polyhedron_into};
pub use polyhedron::{Polyhedron, Triangle};
