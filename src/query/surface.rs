use url::Url;

use crate::types::{Side, Species};

use super::common::Query;

/// Query parameters for the `/surfaces/hemispheres` endpoint.
pub struct SurfaceQuery {
    pub species: Species,
    pub side: Side,
}

impl SurfaceQuery {
    pub fn new(species: Species, side: Side) -> Self {
        Self { species, side }
    }
}

impl Query for SurfaceQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("species", self.species.to_string().as_str());
        url.query_pairs_mut()
            .append_pair("side", self.side.to_string().as_str());
        url
    }
}
