use url::Url;

use crate::types::{ApiSurface, VertexId};

use super::common::Query;

/// Query parameters for the `/features/nimare` endpoint.
///
/// Coordinates are optional: [`NimareQuery::for_vertex`] leaves an axis
/// unset when the vertex is out of range for that coordinate array, and
/// unset axes are omitted from the query string. The backend rejects
/// such requests with a 400.
pub struct NimareQuery {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl NimareQuery {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Builds the query from the position of `vertex` on `surface`.
    pub fn for_vertex(surface: &ApiSurface, vertex: VertexId) -> Self {
        Self {
            x: surface.x_coordinate.get(vertex).copied(),
            y: surface.y_coordinate.get(vertex).copied(),
            z: surface.z_coordinate.get(vertex).copied(),
        }
    }
}

impl Query for NimareQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(x) = self.x {
            url.query_pairs_mut()
                .append_pair("x", x.to_string().as_str());
        };
        if let Some(y) = self.y {
            url.query_pairs_mut()
                .append_pair("y", y.to_string().as_str());
        };
        if let Some(z) = self.z {
            url.query_pairs_mut()
                .append_pair("z", z.to_string().as_str());
        };
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{NimareQuery, Query},
        types::{ApiSurface, Side, Species},
    };

    fn two_vertex_surface() -> ApiSurface {
        ApiSurface {
            name: "human_left".to_string(),
            species: Species::Human,
            side: Side::Left,
            x_coordinate: vec![1.0, 2.0],
            y_coordinate: vec![3.0, 4.0],
            z_coordinate: vec![5.0, 6.0],
            i_faces: vec![0],
            j_faces: vec![1],
            k_faces: vec![1],
        }
    }

    #[test]
    fn nimare_query_for_vertex() {
        let url = Url::parse("http://localhost:8000/features/nimare").unwrap();
        let url = NimareQuery::for_vertex(&two_vertex_surface(), 1).add_to_url(&url);
        assert_eq!(url.query(), Some("x=2&y=4&z=6"));
    }

    #[test]
    fn nimare_query_out_of_bounds_vertex_omits_axes() {
        let url = Url::parse("http://localhost:8000/features/nimare").unwrap();
        let url = NimareQuery::for_vertex(&two_vertex_surface(), 2).add_to_url(&url);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn nimare_query_explicit_coordinates() {
        let url = Url::parse("http://localhost:8000/features/nimare").unwrap();
        let url = NimareQuery::new(-43.7, 10.1, 22.5).add_to_url(&url);
        assert_eq!(url.query(), Some("x=-43.7&y=10.1&z=22.5"));
    }
}
