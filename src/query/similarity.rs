use url::Url;

use crate::types::{Side, Species, VertexId};

use super::common::Query;

/// Query parameters for the `/features/cross_species` endpoint.
///
/// The species/side/vertex triple identifies the seed vertex the
/// similarity map is computed against.
pub struct SimilarityQuery {
    pub seed_species: Species,
    pub seed_side: Side,
    pub seed_vertex: VertexId,
}

impl SimilarityQuery {
    pub fn new(seed_species: Species, seed_side: Side, seed_vertex: VertexId) -> Self {
        Self {
            seed_species,
            seed_side,
            seed_vertex,
        }
    }
}

impl Query for SimilarityQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("seed_species", self.seed_species.to_string().as_str());
        url.query_pairs_mut()
            .append_pair("seed_side", self.seed_side.to_string().as_str());
        url.query_pairs_mut()
            .append_pair("seed_vertex", self.seed_vertex.to_string().as_str());
        url
    }
}
