//! Surface-related types returned by the API.

use serde::{Deserialize, Serialize};

/// Index of a vertex into a surface's coordinate arrays, 0-indexed.
pub type VertexId = usize;

/// Species whose hemisphere surfaces the backend serves.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub enum Species {
    /// Human fsLR-10k surfaces.
    #[serde(rename = "human")]
    Human,

    /// Macaque fsLR-10k surfaces.
    #[serde(rename = "macaque")]
    Macaque,
}
impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Species::Human => "human",
                Species::Macaque => "macaque",
            }
        )
    }
}

/// Which hemisphere of the brain a surface belongs to.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub enum Side {
    /// Left hemisphere.
    #[serde(rename = "left")]
    Left,

    /// Right hemisphere.
    #[serde(rename = "right")]
    Right,
}
impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::Left => "left",
                Side::Right => "right",
            }
        )
    }
}

/// A single hemisphere's surface mesh returned by the
/// `/surfaces/hemispheres` endpoint.
///
/// The coordinate arrays are parallel, one entry per vertex. The face
/// arrays hold the three corner vertices of each mesh triangle.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSurface {
    /// Surface name, `<species>_<side>` (e.g. "human_left").
    pub name: String,

    /// Species this hemisphere belongs to.
    pub species: Species,

    /// Which hemisphere.
    pub side: Side,

    /// Per-vertex x positions, in millimeters.
    pub x_coordinate: Vec<f64>,

    /// Per-vertex y positions, in millimeters.
    pub y_coordinate: Vec<f64>,

    /// Per-vertex z positions, in millimeters.
    pub z_coordinate: Vec<f64>,

    /// First corner vertex of each triangle.
    pub i_faces: Vec<VertexId>,

    /// Second corner vertex of each triangle.
    pub j_faces: Vec<VertexId>,

    /// Third corner vertex of each triangle.
    pub k_faces: Vec<VertexId>,
}

impl ApiSurface {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.x_coordinate.len()
    }
}
