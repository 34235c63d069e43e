//! View Controller
//!
//! Loads both movie lists into their containers and drives playback.
//! Every view it touches is injected at construction.


use std::sync::Arc;

use crate::api::MovieApi;
use crate::card::render_card;
use crate::error::ApiError;
use crate::models::ListKind;
use crate::overlay::OverlayController;
use crate::view::{ListView, PlayerView};

/// Called for every failed request. Failures are otherwise silent.
pub type ErrorHook = Arc<dyn Fn(&LoadFailure) + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    LoadList(ListKind),
    Playback { item_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub operation: Operation,
    pub error: ApiError,
}

pub struct ViewController<A, L, P> {
    api: Arc<A>,
    watched: L,
    recommended: L,
    overlay: OverlayController<A, P>,
    on_error: Option<ErrorHook>,
}

impl<A: MovieApi, L: ListView, P: PlayerView> ViewController<A, L, P> {
    pub fn new(api: A, watched: L, recommended: L, player: P) -> Self {
        let api = Arc::new(api);
        Self {
            overlay: OverlayController::new(Arc::clone(&api), player),
            api,
            watched,
            recommended,
            on_error: None,
        }
    }

    pub fn with_error_hook(mut self, hook: impl Fn(&LoadFailure) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Load both lists concurrently. Each renders as soon as its own response lands.
    pub async fn initialize(&self) {
        log::info!("[APP] Loading movie lists");
        futures::join!(
            self.load_list(ListKind::Watched),
            self.load_list(ListKind::Recommended)
        );
    }

    /// Fetch one list and append a card per movie, in server order.
    /// Returns the number of cards rendered.
    pub async fn load_list(&self, kind: ListKind) -> usize {
        match self.api.list(kind).await {
            Ok(movies) => {
                let view = self.list_view(kind);
                let is_watched = kind == ListKind::Watched;
                for movie in &movies {
                    view.append(render_card(movie, is_watched));
                }
                movies.len()
            }
            Err(error) => {
                self.report(Operation::LoadList(kind), error);
                0
            }
        }
    }

    /// "Watch" action: fetch the playable URL and open the overlay
    pub async fn trigger_playback(&self, item_id: &str) {
        if let Err(error) = self.overlay.open(item_id).await {
            self.report(
                Operation::Playback {
                    item_id: item_id.to_string(),
                },
                error,
            );
        }
    }

    pub fn close_player(&self) {
        self.overlay.close();
    }

    #[cfg(test)]
    pub fn overlay(&self) -> &OverlayController<A, P> {
        &self.overlay
    }

    fn list_view(&self, kind: ListKind) -> &L {
        match kind {
            ListKind::Watched => &self.watched,
            ListKind::Recommended => &self.recommended,
        }
    }

    fn report(&self, operation: Operation, error: ApiError) {
        log::warn!("[APP] {:?} failed: {}", operation, error);
        if let Some(hook) = &self.on_error {
            hook(&LoadFailure { operation, error });
        }
    }
}
