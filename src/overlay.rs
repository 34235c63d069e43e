//! Video Overlay Controller
//!
//! Owns the playback context for the modal player: `open` fetches a playable
//! URL and shows it, `close` always clears and hides.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::api::MovieApi;
use crate::error::{ApiError, ApiResult};
use crate::view::PlayerView;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible { item_id: String, play_url: String },
}

/// Result of an `open` whose request succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Shown,
    /// A later `open` or a `close` happened while this one was in flight
    Superseded,
}

pub struct OverlayController<A, P> {
    api: Arc<A>,
    player: P,
    state: Mutex<OverlayState>,
    // Bumped by every open and close; a response only applies if its ticket is still current.
    ticket: AtomicU64,
}

impl<A: MovieApi, P: PlayerView> OverlayController<A, P> {
    pub fn new(api: Arc<A>, player: P) -> Self {
        Self {
            api,
            player,
            state: Mutex::new(OverlayState::Hidden),
            ticket: AtomicU64::new(0),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> OverlayState {
        self.lock_state().clone()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        matches!(*self.lock_state(), OverlayState::Visible { .. })
    }

    /// Fetch the playable URL for `item_id` and show it.
    ///
    /// On failure the overlay is left untouched.
    pub async fn open(&self, item_id: &str) -> ApiResult<OpenOutcome> {
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let info = self.api.play_url(item_id).await?;
        if self.ticket.load(Ordering::SeqCst) != ticket {
            log::debug!("[Overlay] Dropping stale play url for {}", item_id);
            return Ok(OpenOutcome::Superseded);
        }

        if info.play_url.trim().is_empty() {
            return Err(ApiError::EmptyPlayUrl(item_id.to_string()));
        }

        self.player.set_source(&info.play_url);
        self.player.set_visible(true);
        *self.lock_state() = OverlayState::Visible {
            item_id: item_id.to_string(),
            play_url: info.play_url,
        };
        log::info!("[Overlay] Playing {}", item_id);
        Ok(OpenOutcome::Shown)
    }

    /// Clear the player source and hide the overlay, whatever is in flight.
    pub fn close(&self) {
        self.ticket.fetch_add(1, Ordering::SeqCst);
        self.player.set_source("");
        self.player.set_visible(false);
        *self.lock_state() = OverlayState::Hidden;
        log::debug!("[Overlay] Closed");
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, OverlayState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
