//! Application Context
//!
//! Shared controller provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpMovieApi;
use crate::controller::ViewController;
use crate::view::{ListHandle, PlayerHandle};

/// Controller wired to the browser API and signal-backed views
pub type AppController = ViewController<HttpMovieApi, ListHandle, PlayerHandle>;

/// App-wide context
#[derive(Clone)]
pub struct AppContext {
    controller: Arc<AppController>,
}

impl AppContext {
    pub fn new(controller: Arc<AppController>) -> Self {
        Self { controller }
    }

    /// Load both lists once
    pub fn initialize(&self) {
        let controller = Arc::clone(&self.controller);
        spawn_local(async move {
            controller.initialize().await;
        });
    }

    /// Start playback of an item in the modal player
    pub fn play(&self, item_id: String) {
        let controller = Arc::clone(&self.controller);
        spawn_local(async move {
            controller.trigger_playback(&item_id).await;
        });
    }

    pub fn close_player(&self) {
        self.controller.close_player();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
