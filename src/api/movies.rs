//! Movie Endpoints
//!
//! Browser-fetch implementation of [`MovieApi`].

use async_trait::async_trait;

use super::{fetch_json, Endpoint, MovieApi};
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::models::{ListKind, MovieSummary, PlaybackInfo};

#[derive(Debug, Clone, Default)]
pub struct HttpMovieApi {
    config: ApiConfig,
}

impl HttpMovieApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl MovieApi for HttpMovieApi {
    async fn list(&self, kind: ListKind) -> ApiResult<Vec<MovieSummary>> {
        let url = self.config.url(&Endpoint::List(kind).path());
        log::debug!("[API] GET {}", url);
        let movies: Vec<MovieSummary> = fetch_json(&url).await?;
        log::info!("[API] Loaded {} {} movies", movies.len(), kind.label());
        Ok(movies)
    }

    async fn play_url(&self, item_id: &str) -> ApiResult<PlaybackInfo> {
        let url = self.config.url(&Endpoint::PlayUrl(item_id).path());
        log::debug!("[API] GET {}", url);
        fetch_json(&url).await
    }
}
