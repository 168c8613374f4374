//! Mesh import and export.
//!
//! Formats are behind cargo feature-flags; errors surface as
//! [`InsideError::Io`](crate::errors::InsideError::Io).

#[cfg(feature = "stl-io")]
pub mod stl;
