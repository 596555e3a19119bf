//! NiMare term annotation types returned by the API.

use serde::{Deserialize, Serialize};

/// A single term annotation from the NiMare meta-analysis decoder.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NiMareFeature {
    /// Term from the meta-analytic vocabulary (e.g. "motor").
    pub name: String,

    /// Correlation between the term's meta-analytic map and the
    /// queried coordinate.
    pub correlation: f64,
}

/// Term annotations for a 3D coordinate, as returned by the
/// `/features/nimare` endpoint.
#[derive(Serialize, Deserialize)]
pub struct NiMareResponse {
    pub features: Vec<NiMareFeature>,
}
