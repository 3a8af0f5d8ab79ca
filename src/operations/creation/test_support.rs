use std::collections::HashMap;

use crate::geometry::Quad;
use crate::math::Point3;

/// Result of merging coincident quad corners into a shared vertex set.
pub(crate) struct Welded {
    pub vertices: usize,
    /// Number of faces on each distinct edge.
    pub edge_faces: Vec<usize>,
    pub faces: usize,
}

impl Welded {
    pub fn edges(&self) -> usize {
        self.edge_faces.len()
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges() as i64 + self.faces as i64
    }

    /// Every edge borders exactly two faces.
    pub fn is_closed_manifold(&self) -> bool {
        self.edge_faces.iter().all(|&n| n == 2)
    }
}

/// Merges corners closer than `1e-6` and counts the faces on each edge.
pub(crate) fn weld(quads: &[Quad]) -> Welded {
    let mut vertices: Vec<Point3> = Vec::new();
    let mut index_of = |p: &Point3| -> usize {
        if let Some(i) = vertices.iter().position(|v| (v - p).norm() < 1e-6) {
            i
        } else {
            vertices.push(*p);
            vertices.len() - 1
        }
    };
    let mut edge_faces: HashMap<(usize, usize), usize> = HashMap::new();
    for q in quads {
        let ids: Vec<usize> = q.points().iter().map(&mut index_of).collect();
        for k in 0..4 {
            let (a, b) = (ids[k], ids[(k + 1) % 4]);
            *edge_faces.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    Welded {
        vertices: vertices.len(),
        edge_faces: edge_faces.into_values().collect(),
        faces: quads.len(),
    }
}

/// Asserts that the quads weld into a closed sphere-like solid.
pub(crate) fn assert_closed_solid(quads: &[Quad], label: &str) {
    let welded = weld(quads);
    assert_eq!(
        welded.euler_characteristic(),
        2,
        "{label}: V={} E={} F={}",
        welded.vertices,
        welded.edges(),
        welded.faces
    );
    assert!(welded.is_closed_manifold(), "{label}: open or non-manifold edge");
}
