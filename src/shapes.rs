//! Closed triangle meshes for common solids

use crate::float_types::{PI, Real, TAU};
use crate::polyhedron::{Polyhedron, Triangle};
use nalgebra::Point3;

/// Triangles from a vertex table and index triples known to be in range.
fn from_table(vertices: &[Point3<Real>], indices: &[[usize; 3]]) -> Polyhedron {
    let faces: Vec<Triangle> = indices
        .iter()
        .map(|&[a, b, c]| [vertices[a], vertices[b], vertices[c]])
        .collect();
    Polyhedron::from_faces(faces)
}

impl Polyhedron {
    /// Axis-aligned box spanning `[0, width] x [0, length] x [0, height]`, 12 triangles.
    ///
    /// ```text
    ///     4-------5
    ///    /|      /|
    ///   0-------1 |
    ///   | |     | |
    ///   | 7-----|-6
    ///   |/      |/
    ///   3-------2
    /// ```
    /// Each quad `[a, b, c, d]` is split along its `a-c` diagonal.
    pub fn cuboid(width: Real, length: Real, height: Real) -> Polyhedron {
        let vertices = [
            Point3::new(0.0, 0.0, 0.0),          // 0: origin
            Point3::new(width, 0.0, 0.0),        // 1: +X
            Point3::new(width, length, 0.0),     // 2: +X+Y
            Point3::new(0.0, length, 0.0),       // 3: +Y
            Point3::new(0.0, 0.0, height),       // 4: +Z
            Point3::new(width, 0.0, height),     // 5: +X+Z
            Point3::new(width, length, height),  // 6: +X+Y+Z
            Point3::new(0.0, length, height),    // 7: +Y+Z
        ];
        let quads = [
            [0, 3, 2, 1], // Bottom face
            [4, 5, 6, 7], // Top face
            [0, 1, 5, 4], // Front face
            [3, 7, 6, 2], // Back face
            [0, 4, 7, 3], // Left face
            [1, 2, 6, 5], // Right face
        ];
        let indices: Vec<[usize; 3]> = quads
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
            .collect();
        from_table(&vertices, &indices)
    }

    pub fn cube(width: Real) -> Polyhedron {
        Self::cuboid(width, width, width)
    }

    /// Right-corner tetrahedron with legs of length `size` along +X, +Y and +Z.
    pub fn tetrahedron(size: Real) -> Polyhedron {
        let vertices = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(size, 0.0, 0.0),
            Point3::new(0.0, size, 0.0),
            Point3::new(0.0, 0.0, size),
        ];
        from_table(&vertices, &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]])
    }

    /// Regular octahedron with its vertices at distance `radius` on the axes.
    pub fn octahedron(radius: Real) -> Polyhedron {
        let vertices = [
            Point3::new(radius, 0.0, 0.0),
            Point3::new(-radius, 0.0, 0.0),
            Point3::new(0.0, radius, 0.0),
            Point3::new(0.0, -radius, 0.0),
            Point3::new(0.0, 0.0, radius),
            Point3::new(0.0, 0.0, -radius),
        ];
        let indices = [
            [0, 2, 4],
            [2, 1, 4],
            [1, 3, 4],
            [3, 0, 4],
            [5, 2, 0],
            [5, 1, 2],
            [5, 3, 1],
            [5, 0, 3],
        ];
        from_table(&vertices, &indices)
    }

    /// UV sphere centered at the origin with poles on the Y axis.
    ///
    /// `segments` is clamped to at least 3 and `stacks` to at least 2. Every vertex is
    /// computed once and shared, so the mesh is closed.
    pub fn sphere(radius: Real, segments: usize, stacks: usize) -> Polyhedron {
        let segments = segments.max(3);
        let stacks = stacks.max(2);

        let mut vertices = Vec::with_capacity(2 + (stacks - 1) * segments);
        // north pole
        vertices.push(Point3::new(0.0, radius, 0.0));
        for j in 1..stacks {
            let phi = j as Real / stacks as Real * PI;
            let y = radius * phi.cos();
            let ring_radius = radius * phi.sin();
            for i in 0..segments {
                let theta = i as Real / segments as Real * TAU;
                vertices.push(Point3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin()));
            }
        }
        // south pole
        vertices.push(Point3::new(0.0, -radius, 0.0));

        let north_pole = 0;
        let south_pole = vertices.len() - 1;
        let ring = |j: usize, i: usize| 1 + (j - 1) * segments + i % segments;

        let mut indices = Vec::with_capacity(2 * segments * (stacks - 1));
        for i in 0..segments {
            indices.push([north_pole, ring(1, i + 1), ring(1, i)]);
        }
        for j in 1..stacks - 1 {
            for i in 0..segments {
                let (v1, v2) = (ring(j, i), ring(j, i + 1));
                let (v3, v4) = (ring(j + 1, i), ring(j + 1, i + 1));
                indices.push([v1, v3, v2]);
                indices.push([v2, v3, v4]);
            }
        }
        for i in 0..segments {
            indices.push([south_pole, ring(stacks - 1, i), ring(stacks - 1, i + 1)]);
        }

        from_table(&vertices, &indices)
    }
}
