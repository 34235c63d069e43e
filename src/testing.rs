//! In-memory fakes for driving controllers without a browser.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::{Endpoint, MovieApi};
use crate::card::MovieCard;
use crate::error::{ApiError, ApiResult};
use crate::models::{ListKind, MovieSummary, PlaybackInfo};
use crate::view::{ListView, PlayerView};

/// Canned backend. Unknown lists are empty, unknown items are 404s.
#[derive(Default)]
pub struct FakeApi {
    lists: Mutex<HashMap<ListKind, ApiResult<Vec<MovieSummary>>>>,
    play_urls: Mutex<HashMap<String, ApiResult<PlaybackInfo>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, kind: ListKind, result: ApiResult<Vec<MovieSummary>>) -> Self {
        self.lists.lock().unwrap().insert(kind, result);
        self
    }

    pub fn with_play_url(self, item_id: &str, play_url: &str) -> Self {
        let info = PlaybackInfo {
            play_url: play_url.to_string(),
        };
        self.play_urls.lock().unwrap().insert(item_id.to_string(), Ok(info));
        self
    }

    pub fn with_play_error(self, item_id: &str, error: ApiError) -> Self {
        self.play_urls.lock().unwrap().insert(item_id.to_string(), Err(error));
        self
    }

    /// Hold requests to `path` until the returned sender fires (or is dropped)
    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(path.to_string(), rx);
        tx
    }

    /// Paths requested so far, in issue order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn record_and_wait(&self, path: &str) {
        self.requests.lock().unwrap().push(path.to_string());
        let gate = self.gates.lock().unwrap().remove(path);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait(?Send)]
impl MovieApi for FakeApi {
    async fn list(&self, kind: ListKind) -> ApiResult<Vec<MovieSummary>> {
        let path = Endpoint::List(kind).path();
        self.record_and_wait(&path).await;
        self.lists
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn play_url(&self, item_id: &str) -> ApiResult<PlaybackInfo> {
        let path = Endpoint::PlayUrl(item_id).path();
        self.record_and_wait(&path).await;
        self.play_urls
            .lock()
            .unwrap()
            .get(item_id)
            .cloned()
            .unwrap_or(Err(ApiError::Status {
                url: path,
                status: 404,
            }))
    }
}

#[derive(Clone, Default)]
pub struct FakeList(Arc<Mutex<Vec<MovieCard>>>);

impl FakeList {
    pub fn cards(&self) -> Vec<MovieCard> {
        self.0.lock().unwrap().clone()
    }
}

impl ListView for FakeList {
    fn append(&self, card: MovieCard) {
        self.0.lock().unwrap().push(card);
    }
}

#[derive(Clone, Default)]
pub struct FakePlayer {
    source: Arc<Mutex<String>>,
    visible: Arc<Mutex<bool>>,
}

impl FakePlayer {
    pub fn source(&self) -> String {
        self.source.lock().unwrap().clone()
    }

    pub fn visible(&self) -> bool {
        *self.visible.lock().unwrap()
    }
}

impl PlayerView for FakePlayer {
    fn set_source(&self, src: &str) {
        *self.source.lock().unwrap() = src.to_string();
    }

    fn set_visible(&self, visible: bool) {
        *self.visible.lock().unwrap() = visible;
    }
}
