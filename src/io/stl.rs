use crate::errors::InsideError;
use crate::float_types::Real;
use crate::polyhedron::{Polyhedron, Triangle};
use nalgebra::{Point3, Vector3};
use std::io::Cursor;

/// Read an ASCII or binary STL into a [`Polyhedron`].
///
/// `stl_io` merges coincident vertices while reading, so the triangles are routed
/// through the same vertex + index path as [`Polyhedron::from_indexed`].
pub fn from_stl(data: &[u8]) -> Result<Polyhedron, InsideError> {
    let mut cursor = Cursor::new(data);
    let mesh = stl_io::read_stl(&mut cursor)?;

    #[allow(clippy::unnecessary_cast)]
    let vertices: Vec<Point3<Real>> = mesh
        .vertices
        .iter()
        .map(|v| Point3::new(v[0] as Real, v[1] as Real, v[2] as Real))
        .collect();
    let indices: Vec<[usize; 3]> = mesh.faces.iter().map(|face| face.vertices).collect();

    Polyhedron::from_indexed(&vertices, &indices)
}

/// Export to ASCII STL
/// Convert the triangles to an **ASCII STL** string with the given `name`.
/// Facet normals are recomputed from the vertex winding.
///
/// ```rust
/// # use inpolyhedron::polyhedron::Polyhedron;
/// let stl = Polyhedron::cube(1.0).to_stl_ascii("cube");
/// assert!(stl.starts_with("solid cube"));
/// assert_eq!(stl.matches("facet normal").count(), 12);
/// ```
pub fn to_stl_ascii(faces: &[Triangle], name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for tri in faces {
        let n = face_normal(tri);
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for p in tri {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to binary STL
/// Convert the triangles to **binary STL** bytes, with normals recomputed as for
/// [`to_stl_ascii`]. Coordinates are narrowed to `f32`.
pub fn to_stl_binary(faces: &[Triangle]) -> Result<Vec<u8>, InsideError> {
    use stl_io::{Normal, Vertex, write_stl};

    #[allow(clippy::unnecessary_cast)]
    let triangles: Vec<stl_io::Triangle> = faces
        .iter()
        .map(|tri| {
            let n = face_normal(tri);
            stl_io::Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            }
        })
        .collect();

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

fn face_normal(tri: &Triangle) -> Vector3<Real> {
    (tri[1] - tri[0])
        .cross(&(tri[2] - tri[0]))
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros)
}

impl Polyhedron {
    pub fn from_stl(data: &[u8]) -> Result<Polyhedron, InsideError> {
        self::from_stl(data)
    }

    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self.faces(), name)
    }

    pub fn to_stl_binary(&self) -> Result<Vec<u8>, InsideError> {
        self::to_stl_binary(self.faces())
    }
}
