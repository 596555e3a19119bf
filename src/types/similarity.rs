//! Cross-species similarity types returned by the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-vertex similarity vectors keyed by surface name, as returned by
/// the `/features/cross_species` endpoint.
///
/// Each entry maps a surface name (e.g. "macaque_right") to one
/// similarity value per vertex of that surface, relative to the seed
/// vertex of the request.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossSpeciesSimilarityResponse {
    pub surfaces: BTreeMap<String, Vec<f64>>,
}

impl CrossSpeciesSimilarityResponse {
    /// Similarity vector for a named surface, if the backend returned one.
    pub fn surface(&self, name: &str) -> Option<&[f64]> {
        self.surfaces.get(name).map(Vec::as_slice)
    }

    /// Names of the surfaces present in the response.
    pub fn surface_names(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }
}
