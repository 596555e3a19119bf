//! HTTP client for the brainviewer backend API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{NimareQuery, Query, SimilarityQuery, SurfaceQuery},
    types::{ApiSurface, CrossSpeciesSimilarityResponse, NiMareResponse, Side, Species, VertexId},
    Error,
};

/// Backend address used when no override is configured.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
const API_URL_VAR: &str = "BRAINVIEWER_API_URL";

/// HTTP client for the brainviewer backend API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second
/// timeout. Calls are stateless one-shot requests and may run
/// concurrently with no ordering between them.
pub struct Client {
    /// Base URL for the API. Defaults to `http://localhost:8000`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the default local backend.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Creates a client from the `BRAINVIEWER_API_URL` environment
    /// variable, falling back to the default local backend when the
    /// variable is unset or empty.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.is_empty() => Self { base_api_url: url },
            _ => Self::new(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::ParseFailed
        })?;

        Ok(parsed)
    }

    /// Fetches the hemisphere surface mesh for a species and side.
    pub async fn get_surfaces(&self, species: Species, side: Side) -> Result<ApiSurface, Error> {
        self.get::<ApiSurface, SurfaceQuery>(
            "/surfaces/hemispheres",
            Some(&SurfaceQuery::new(species, side)),
        )
        .await
    }

    /// Fetches per-vertex similarity to a seed vertex, for every
    /// surface the backend serves.
    pub async fn get_cross_species_similarity(
        &self,
        species: Species,
        side: Side,
        vertex: VertexId,
    ) -> Result<CrossSpeciesSimilarityResponse, Error> {
        self.get::<CrossSpeciesSimilarityResponse, SimilarityQuery>(
            "/features/cross_species",
            Some(&SimilarityQuery::new(species, side, vertex)),
        )
        .await
    }

    /// Fetches NiMare term annotations for the position of `vertex` on
    /// `surface`.
    ///
    /// A vertex outside the surface's coordinate arrays is not an error
    /// here: the affected axes are simply absent from the request, and
    /// the backend answers with a 400.
    pub async fn get_nimare_terms(
        &self,
        surface: &ApiSurface,
        vertex: VertexId,
    ) -> Result<NiMareResponse, Error> {
        self.get::<NiMareResponse, NimareQuery>(
            "/features/nimare",
            Some(&NimareQuery::for_vertex(surface, vertex)),
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
